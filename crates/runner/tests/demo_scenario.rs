//! Demo Scenario Integration Test
//!
//! Replays the console demo against in-memory sinks:
//! - Bootstrap with the default roster
//! - Apple, Google, Microsoft, detach Maria, Tesla

use quotecast_exchange::{
    DeliveryPolicy, ExchangeConfig, ExchangeError, RecordingSink, SinkFormat, WriterSink,
};
use quotecast_runner::{Bootstrap, BootstrapConfig, Scenario, ScenarioStep};
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Test the demo delivers to the expected recipients in order
#[test]
fn test_demo_recipients() {
    let _ = env_logger::try_init();

    let sink = Arc::new(RecordingSink::new());
    let mut bootstrap = Bootstrap::with_config(BootstrapConfig::default(), sink.clone()).unwrap();

    Scenario::demo().run(&mut bootstrap.exchange).unwrap();

    let expected = vec![
        // Apple
        "Maria",
        "TradeMax",
        // Google
        "Oleksandr",
        "Maria",
        "TradeMax",
        // Microsoft
        "Maria",
        "TradeMax",
        // Tesla, after Maria left
        "TradeMax",
    ];
    assert_eq!(sink.recipients(), expected);
    assert_eq!(bootstrap.exchange.last_topic(), "Tesla");
    assert_eq!(bootstrap.exchange.last_price(), dec!(700.00));
}

/// Test the demo's console text through a writer sink
#[test]
fn test_demo_text_output() {
    let _ = env_logger::try_init();

    let sink = Arc::new(WriterSink::new(Vec::new(), SinkFormat::Text));
    let mut bootstrap = Bootstrap::with_config(BootstrapConfig::default(), sink.clone()).unwrap();

    Scenario::demo().run(&mut bootstrap.exchange).unwrap();
    drop(bootstrap);

    let sink = Arc::try_unwrap(sink).ok().expect("sink still shared");
    let output = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "Investor Maria notified: Apple changed price to 145.50"
    );
    assert_eq!(
        lines[2],
        "Investor Oleksandr notified: Google changed price to 2730.20"
    );
    assert_eq!(lines[7], "Broker TradeMax notified: Tesla now trades at 700.00");
}

/// Test fail-fast config aborts the scenario on the first failed delivery
#[test]
fn test_fail_fast_scenario() {
    let _ = env_logger::try_init();

    let sink = Arc::new(RecordingSink::new());
    sink.fail_for("TradeMax");

    let config = BootstrapConfig::with_exchange(ExchangeConfig {
        delivery_policy: DeliveryPolicy::FailFast,
        ..Default::default()
    });
    let mut bootstrap = Bootstrap::with_config(config, sink.clone()).unwrap();

    let err = Scenario::demo().run(&mut bootstrap.exchange).unwrap_err();
    assert!(matches!(err, ExchangeError::Delivery(f) if f.display_name == "TradeMax"));

    // Apple reached Maria, then stopped at TradeMax
    assert_eq!(sink.recipients(), vec!["Maria"]);
    assert_eq!(bootstrap.exchange.last_topic(), "Apple");
}

/// Test best-effort config keeps going and reports failures
#[test]
fn test_best_effort_scenario() {
    let _ = env_logger::try_init();

    let sink = Arc::new(RecordingSink::new());
    sink.fail_for("Maria");

    let mut bootstrap = Bootstrap::with_config(BootstrapConfig::default(), sink.clone()).unwrap();
    let scenario = Scenario::new(vec![
        ScenarioStep::publish("Apple", dec!(145.50)),
        ScenarioStep::publish("Google", dec!(2730.20)),
    ]);

    let report = scenario.run(&mut bootstrap.exchange).unwrap();
    assert_eq!(report.total_failures(), 2);
    assert_eq!(report.total_delivered(), 3);
    assert_eq!(sink.recipients(), vec!["TradeMax", "Oleksandr", "TradeMax"]);
}
