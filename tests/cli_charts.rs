//! End-to-end tests for `growth charts`.

mod common;

use common::TestEnv;

const ZERO_RATE_USD: [&str; 10] = ["-a", "10000", "-d", "12", "-u", "months", "-r", "0", "-c", "USD"];

fn charts(env: &TestEnv, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["charts"];
    args.extend_from_slice(&ZERO_RATE_USD);
    args.extend_from_slice(extra);
    let result = env.run(&args);
    assert!(result.success, "stderr: {}", result.stderr);
    result.json()
}

#[test]
fn charts_emit_doughnut_and_line_specs() {
    let env = TestEnv::new();
    let set = charts(&env, &[]);

    let donut = &set["donut"];
    assert_eq!(donut["type"], "doughnut");
    assert_eq!(donut["currency"], "USD");
    assert_eq!(donut["data"]["datasets"][0]["data"], serde_json::json!([10000.0, 0.0]));
    assert_eq!(
        donut["data"]["datasets"][0]["backgroundColor"],
        serde_json::json!(["#bd8604", "#012b1a"])
    );
    assert_eq!(donut["options"]["animation"]["duration"], 800);
    assert_eq!(donut["options"]["plugins"]["legend"]["position"], "bottom");

    let line = &set["line"];
    assert_eq!(line["type"], "line");
    assert_eq!(line["data"]["labels"].as_array().unwrap().len(), 2);
    assert_eq!(line["data"]["datasets"][0]["fill"], true);
    assert_eq!(line["data"]["datasets"][0]["pointRadius"], 0);
    assert_eq!(line["options"]["scales"]["y"]["ticks"]["format"], "currency");
    assert_eq!(line["options"]["animation"]["duration"], 900);
}

#[test]
fn reduced_motion_flag_disables_animation() {
    let env = TestEnv::new();
    let set = charts(&env, &["--reduced-motion"]);

    assert_eq!(set["donut"]["options"]["animation"], false);
    assert_eq!(set["line"]["options"]["animation"], false);
}

#[test]
fn reduced_motion_env_disables_animation() {
    let env = TestEnv::new();
    let mut args = vec!["charts"];
    args.extend_from_slice(&ZERO_RATE_USD);
    let result = env.run_with_env(&args, &[("GROWTH_REDUCED_MOTION", "1")]);
    assert!(result.success, "stderr: {}", result.stderr);

    assert_eq!(result.json()["line"]["options"]["animation"], false);
}

#[test]
fn charts_pretty_prints() {
    let env = TestEnv::new();
    let mut args = vec!["charts", "--pretty"];
    args.extend_from_slice(&ZERO_RATE_USD);
    let result = env.run(&args);
    assert!(result.success, "stderr: {}", result.stderr);

    assert!(result.stdout.starts_with("{\n  \"donut\": {"), "stdout:\n{}", result.stdout);
    assert!(result.json()["donut"].is_object());
}

#[test]
fn charts_json_event_wraps_set_and_summary() {
    let env = TestEnv::new();
    let mut args = vec!["--json", "charts"];
    args.extend_from_slice(&ZERO_RATE_USD);
    let result = env.run(&args);
    assert!(result.success, "stderr: {}", result.stderr);

    let event = result.json();
    assert_eq!(event["event"], "charts");
    assert_eq!(event["summary"], "השקעה זו תהיה שווה: $10,000");
    assert_eq!(event["charts"]["donut"]["type"], "doughnut");
}

#[test]
fn configured_labels_and_colors_reach_the_specs() {
    let env = TestEnv::new();
    env.write_project_config(
        r##"
[labels]
principal = "Principal"
growth = "Growth"
series = "Value"
x_axis = "Year"
y_axis = "Worth"

[chart]
principal_color = "#111111"
"##,
    );
    let set = charts(&env, &[]);

    assert_eq!(set["donut"]["data"]["labels"], serde_json::json!(["Principal", "Growth"]));
    assert_eq!(set["donut"]["data"]["datasets"][0]["backgroundColor"][0], "#111111");
    assert_eq!(set["line"]["data"]["datasets"][0]["label"], "Value");
    assert_eq!(set["line"]["options"]["scales"]["x"]["title"]["text"], "Year");
}
