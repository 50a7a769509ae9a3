#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use statview_server::{cli::Cli, config, error::AppError};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
chart:
  widht: 640 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)), "{err}");
    assert_eq!(err.client_code(), "INTERNAL");
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert!(cfg.app.in_production);
    assert!(cfg.app.use_cache);
    assert_eq!((cfg.chart.width, cfg.chart.height, cfg.chart.histogram_bins), (800, 400, 50));
    assert_eq!(cfg.sampling.income.samples, 10_000);
    assert_eq!(cfg.sampling.income.mean, 27_000.0);
    assert_eq!(cfg.sampling.income.std_dev, 15_000.0);
    assert_eq!(cfg.sampling.spread.mean, 100.0);
    assert_eq!(cfg.sampling.page_speed.samples, 1000);
    assert_eq!(cfg.sampling.regression.seed, 0);
}

#[test]
fn full_config_round_trips_values() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  static_dir: "/srv/static"
app:
  in_production: false
  use_cache: false
chart:
  width: 640
  height: 320
  histogram_bins: 20
sampling:
  income: { samples: 500, mean: 10.0, std_dev: 2.0 }
  regression: { samples: 50, seed: 42 }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert!(!cfg.app.in_production);
    assert!(!cfg.app.use_cache);
    assert_eq!(cfg.chart.histogram_bins, 20);
    assert_eq!(cfg.sampling.income.samples, 500);
    assert_eq!(cfg.sampling.spread.samples, 10_000);
    assert_eq!(cfg.sampling.regression.seed, 42);
}

#[test]
fn out_of_range_values_are_rejected() {
    for bad in [
        "version: 2\n",
        "version: 1\nserver: { listen: \"not-an-addr\" }\n",
        "version: 1\nchart: { width: 10 }\n",
        "version: 1\nchart: { histogram_bins: 0 }\n",
        "version: 1\nsampling: { income: { samples: 1, mean: 0.0, std_dev: 1.0 } }\n",
        "version: 1\nsampling: { spread: { samples: 10, mean: 0.0, std_dev: 0.0 } }\n",
        "version: 1\nsampling: { page_speed: { samples: 0 } }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert!(matches!(err, AppError::Config(_)), "{bad}: {err}");
    }
}

#[test]
fn cli_flags_override_file_defaults() {
    let cli = Cli {
        config: None,
        production: Some(false),
        cache: Some(false),
        listen: Some("127.0.0.1:0".into()),
    };
    let cfg = cli.load_config().unwrap();
    assert!(!cfg.app.in_production);
    assert!(!cfg.app.use_cache);
    assert_eq!(cfg.server.listen, "127.0.0.1:0");

    let defaults = Cli { config: None, production: None, cache: None, listen: None };
    let cfg = defaults.load_config().unwrap();
    assert!(cfg.app.in_production && cfg.app.use_cache);
}

#[test]
fn missing_config_file_is_config_error() {
    let err = config::load_from_file("/nonexistent/statview.yaml").expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}
