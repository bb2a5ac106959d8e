//! Unit tests for presence probing and the power-up sequence

use crate::common::test_utils::MockDelay;
use crate::common::create_mock_driver;
use vcnl4020::Error;

#[test]
fn test_init_succeeds_with_valid_revision() {
    let (mut driver, _interface) = create_mock_driver();

    let result = driver.init(&mut MockDelay);
    assert!(result.is_ok(), "Init should succeed: {result:?}");
}

#[test]
fn test_init_power_up_register_image() {
    let (mut driver, interface) = create_mock_driver();

    driver.init(&mut MockDelay).unwrap();

    // Command register: ALS + proximity + self-timed enabled, on-demand
    // triggers clear, config_lock bit untouched
    assert_eq!(interface.get_register(0x80), 0x87);
    // Proximity rate: fastest (250/s)
    assert_eq!(interface.get_register(0x82), 0x07);
    // IR LED current: 200 mA = 20 x 10 mA
    assert_eq!(interface.get_register(0x83), 0x14);
    // Ambient parameter: 10 samples/s, averaging 1 sample, flag bits clear
    assert_eq!(interface.get_register(0x84), 0x70);
    // Interrupt control: prox-ready + ALS-ready enables, count 1, no thresholds
    assert_eq!(interface.get_register(0x89), 0x0C);
    // Proximity modulator: default 390.625 kHz carrier
    assert_eq!(interface.get_register(0x8F), 0x00);
}

#[test]
fn test_init_fails_when_device_absent() {
    let (mut driver, interface) = create_mock_driver();

    // Device never acknowledges its address
    interface.fail_all_reads(true);

    let result = driver.init(&mut MockDelay);
    assert!(matches!(result, Err(Error::InitializationTimeout)));

    // Presence is probed exactly 5 times before giving up
    assert_eq!(interface.read_attempts(), 5);
}

#[test]
fn test_init_recovers_from_transient_probe_failure() {
    let (mut driver, interface) = create_mock_driver();

    // First probe NACKs, the retry succeeds
    interface.fail_next_read();

    let result = driver.init(&mut MockDelay);
    assert!(result.is_ok(), "Init should retry after a NACK: {result:?}");
}

#[test]
fn test_init_fails_on_wrong_product_revision() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_product_revision(0x31);

    let result = driver.init(&mut MockDelay);
    assert!(matches!(result, Err(Error::InvalidDevice(0x31))));

    // The power-up sequence must not run against unknown silicon
    assert_eq!(interface.write_count(0x80), 0);
}

#[test]
fn test_product_revision_read() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.product_revision().unwrap(), 0x21);
}
