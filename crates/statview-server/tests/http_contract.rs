//! Black-box HTTP contract of the statistics endpoints.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use statview_server::config::ServiceConfig;
use statview_server::dispatch::{SampleOverrides, StatEndpoint};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn keys(v: &Value) -> Vec<&str> {
    let mut k: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    k.sort_unstable();
    k
}

fn png_field(v: &Value, key: &str) -> Vec<u8> {
    let s = v[key].as_str().unwrap_or_else(|| panic!("{key} must be a string"));
    assert!(!s.is_empty(), "{key} is empty");
    let bytes = STANDARD.decode(s).expect("standard base64");
    assert_eq!(&bytes[..8], &PNG_MAGIC, "{key} is not a png");
    bytes
}

#[tokio::test]
async fn mean_returns_chart_and_value_near_target() {
    let app = common::app();
    let (status, body) = common::get_json(&app.router, "/statistics/mean").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keys(&body), vec!["mean", "mean_png"]);
    png_field(&body, "mean_png");
    let mean = body["mean"].as_f64().unwrap();
    assert!((mean - 27_000.0).abs() < 1_000.0, "mean {mean}");
}

#[tokio::test]
async fn median_returns_chart_and_value_near_target() {
    let app = common::app();
    let (status, body) = common::get_json(&app.router, "/statistics/median").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keys(&body), vec!["median", "median_png"]);
    png_field(&body, "median_png");
    let median = body["median"].as_f64().unwrap();
    assert!((median - 27_000.0).abs() < 1_000.0, "median {median}");
}

#[tokio::test]
async fn std_dev_variance_agree() {
    let app = common::app();
    let (status, body) = common::get_json(&app.router, "/statistics/std-deviation-variance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keys(&body), vec!["std_dev", "std_dev_var_png", "variance"]);
    png_field(&body, "std_dev_var_png");
    let sd = body["std_dev"].as_f64().unwrap();
    let var = body["variance"].as_f64().unwrap();
    assert!((sd - 100.0).abs() < 10.0, "std_dev {sd}");
    assert!((sd * sd - var).abs() < 1e-6 * var);
}

#[tokio::test]
async fn distribution_charts_return_only_their_image() {
    let app = common::app();
    for (uri, key) in [
        ("/statistics/pdf", "pdf_png"),
        ("/statistics/binomial", "pmf_png"),
        ("/statistics/poisson", "poisson_png"),
    ] {
        let (status, body) = common::get_json(&app.router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(keys(&body), vec![key], "{uri}");
        png_field(&body, key);
    }
}

#[tokio::test]
async fn covcor_reports_both_relationships() {
    let app = common::app();
    let (status, body) = common::get_json(&app.router, "/statistics/covcor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        keys(&body),
        vec!["correlation", "covariance1", "covariance1_png", "covariance2", "covariance2_png"]
    );
    png_field(&body, "covariance1_png");
    png_field(&body, "covariance2_png");
    let corr = body["correlation"].as_f64().unwrap();
    assert!((-1.0..=1.0).contains(&corr), "correlation {corr}");
    assert!(body["covariance1"].is_f64());
    assert!(body["covariance2"].is_f64());
}

#[tokio::test]
async fn linear_regression_is_reproducible_and_tight() {
    let app = common::app();
    let (status, first) = common::get_json(&app.router, "/statistics/linear-regression").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keys(&first), vec!["linearRegression", "linearRegressionR"]);
    png_field(&first, "linearRegression");
    let r2 = first["linearRegressionR"].as_f64().unwrap();
    assert!(r2 > 0.95 && r2 <= 1.0, "r2 {r2}");

    let (_, second) = common::get_json(&app.router, "/statistics/linear-regression").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn sample_overrides_are_applied() {
    let app = common::app();
    let (status, body) =
        common::get_json(&app.router, "/statistics/mean?n=2000&mean=10&std_dev=0.5").await;
    assert_eq!(status, StatusCode::OK);
    let mean = body["mean"].as_f64().unwrap();
    assert!((mean - 10.0).abs() < 0.2, "mean {mean}");
}

#[tokio::test]
async fn invalid_parameters_are_bad_requests() {
    let app = common::app();
    for uri in [
        "/statistics/mean?n=1",
        "/statistics/mean?n=abc",
        "/statistics/median?std_dev=0",
        "/statistics/median?std_dev=-3",
        "/statistics/std-deviation-variance?mean=inf",
        "/statistics/mean?n=99999999",
        "/statistics/mean?bins=3",
        "/statistics/pdf?n=10",
    ] {
        let (status, body) = common::get_json(&app.router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "BAD_REQUEST", "{uri}");
        assert!(body["message"].as_str().unwrap().contains("invalid parameter"), "{uri}");
    }
}

#[tokio::test]
async fn overflowing_sample_parameters_are_bad_requests() {
    let app = common::app();
    for uri in [
        "/statistics/std-deviation-variance?std_dev=1e200",
        "/statistics/mean?std_dev=1e307",
        "/statistics/mean?mean=1e308&std_dev=1e300",
        "/statistics/median?mean=-1e16",
    ] {
        let (status, body) = common::get_json(&app.router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}: {body}");
        assert_eq!(body["error"], "BAD_REQUEST", "{uri}");
    }
}

#[tokio::test]
async fn largest_sample_parameters_still_yield_numbers() {
    let app = common::app();
    let (status, body) = common::get_json(
        &app.router,
        "/statistics/std-deviation-variance?n=1000&mean=1e15&std_dev=1e15",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["std_dev"].as_f64().unwrap().is_finite());
    assert!(body["variance"].as_f64().unwrap().is_finite());

    let (status, body) =
        common::get_json(&app.router, "/statistics/mean?n=1000&mean=-1e15&std_dev=1e15").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["mean"].as_f64().is_some());
}

struct Exploding;

impl StatEndpoint for Exploding {
    fn name(&self) -> &'static str {
        "exploding"
    }

    fn run(&self, _: &SampleOverrides) -> statview_core::Result<Value> {
        panic!("endpoint blew up");
    }
}

#[tokio::test]
async fn panicking_endpoint_is_internal_error_and_server_keeps_serving() {
    let mut cfg = ServiceConfig::default();
    cfg.app.in_production = true;
    let app = common::app_with_endpoints(cfg, vec![Arc::new(Exploding)]);

    for _ in 0..2 {
        let (status, body) = common::get_json(&app.router, "/statistics/exploding").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "INTERNAL");
        assert_eq!(body["message"], "internal server error");
    }

    let (status, body) = common::get_json(&app.router, "/statistics/mean").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["mean"].as_f64().is_some());
}

#[test]
fn poisson_curve_excludes_upper_count() {
    assert_eq!(statview_server::services::POISSON_KS, 400..600);
}

#[tokio::test]
async fn unknown_statistic_is_not_found() {
    let app = common::app();
    let (status, body) = common::get_json(&app.router, "/statistics/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    for uri in ["/nope", "/statistics/mean/extra", "/ai-basics/b"] {
        let (status, _, _) = common::get(&app.router, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}
