//! Unit tests for interrupt configuration, status decode and clearing

use crate::common::create_initialized_driver;
use vcnl4020::{InterruptConfig, InterruptCount, ThresholdSource};

#[test]
fn test_configure_interrupts_composite_write() {
    let (mut driver, interface) = create_initialized_driver();

    let config = InterruptConfig {
        prox_ready: true,
        als_ready: false,
        threshold: true,
        threshold_source: ThresholdSource::Als,
        count: InterruptCount::Count16,
    };
    driver.configure_interrupts(&config).unwrap();

    // count 4 << 5 | prox_ready_en | thresh_en | thresh_sel
    assert_eq!(interface.get_register(0x89), 0x8B);
    // All five fields land in a single register update
    assert_eq!(interface.write_count(0x89), 1);
}

#[test]
fn test_configure_interrupts_count_round_trip() {
    let (mut driver, interface) = create_initialized_driver();

    for count in [
        InterruptCount::Count1,
        InterruptCount::Count2,
        InterruptCount::Count4,
        InterruptCount::Count8,
        InterruptCount::Count16,
        InterruptCount::Count32,
        InterruptCount::Count64,
        InterruptCount::Count128,
    ] {
        let config = InterruptConfig {
            count,
            ..Default::default()
        };
        driver.configure_interrupts(&config).unwrap();
        assert_eq!(interface.get_register(0x89) >> 5, count as u8);
    }
}

#[test]
fn test_configure_interrupts_preserves_reserved_bit() {
    let (mut driver, interface) = create_initialized_driver();

    interface.set_register(0x89, 0x10);
    driver
        .configure_interrupts(&InterruptConfig::data_ready())
        .unwrap();

    assert_eq!(interface.get_register(0x89), 0x1C);
}

#[test]
fn test_interrupt_status_decode() {
    let (mut driver, interface) = create_initialized_driver();

    interface.set_register(0x8E, 0x0A);

    let status = driver.interrupt_status().unwrap();
    assert!(status.th_low);
    assert!(status.prox_ready);
    assert!(!status.th_high);
    assert!(!status.als_ready);
}

#[test]
fn test_interrupt_status_masks_upper_bits() {
    let (mut driver, interface) = create_initialized_driver();

    // Reserved upper nibble must not leak into the decoded flags
    interface.set_register(0x8E, 0xF0);

    let status = driver.interrupt_status().unwrap();
    assert!(!status.any_set());
}

#[test]
fn test_interrupt_status_read_does_not_clear() {
    let (mut driver, interface) = create_initialized_driver();

    interface.set_register(0x8E, 0x0F);

    driver.interrupt_status().unwrap();
    let status = driver.interrupt_status().unwrap();
    assert!(status.th_high && status.th_low && status.als_ready && status.prox_ready);
    assert_eq!(interface.write_count(0x8E), 0);
}

#[test]
fn test_clear_interrupts_single_flag() {
    let (mut driver, interface) = create_initialized_driver();

    // th_low and als_ready pending, prox_ready not yet raised
    interface.set_register(0x8E, 0x06);
    interface.clear_operations();

    driver.clear_interrupts(true, false, false, false).unwrap();

    // One write-1-to-clear transaction: the prior flags ORed with only the
    // prox-ready mask, the other three bits carried through unchanged
    assert_eq!(interface.write_count(0x8E), 1);
    assert_eq!(interface.last_write(0x8E), Some(0x0E));
}

#[test]
fn test_clear_interrupts_multiple_flags() {
    let (mut driver, interface) = create_initialized_driver();

    interface.set_register(0x8E, 0x00);
    interface.clear_operations();

    driver.clear_interrupts(false, true, true, true).unwrap();

    assert_eq!(interface.write_count(0x8E), 1);
    assert_eq!(interface.last_write(0x8E), Some(0x07));
}

#[test]
fn test_clear_interrupts_nothing_selected() {
    let (mut driver, interface) = create_initialized_driver();

    interface.set_register(0x8E, 0x05);
    interface.clear_operations();

    driver.clear_interrupts(false, false, false, false).unwrap();

    // Still a single transaction, echoing the pending flags back
    assert_eq!(interface.last_write(0x8E), Some(0x05));
}
