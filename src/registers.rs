//! Register definitions for the VCNL4020
//!
//! The VCNL4020 exposes 16 registers at fixed addresses 0x80..=0x8F. There is
//! no bank switching and no indirect addressing; multi-byte result and
//! threshold registers are two consecutive addresses, most significant byte
//! first, which the device serves in one auto-incremented transfer.

device_driver::create_device!(
    device_name: Vcnl4020,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// COMMAND - Register #0 (0x80)
        ///
        /// Mode enables, on-demand triggers and the data-ready flags. The
        /// ready flags are read-only in hardware and are not cleared by
        /// reading this register.
        register Command {
            const ADDRESS = 0x80;
            const SIZE_BITS = 8;

            /// Self-timed (continuous) measurement enable
            selftimed_en: bool = 0,
            /// Periodic proximity measurement enable (requires selftimed_en)
            prox_en: bool = 1,
            /// Periodic ambient light measurement enable (requires selftimed_en)
            als_en: bool = 2,
            /// Single on-demand proximity measurement trigger
            prox_od: bool = 3,
            /// Single on-demand ambient light measurement trigger
            als_od: bool = 4,
            /// Proximity measurement data ready
            prox_data_rdy: bool = 5,
            /// Ambient light measurement data ready
            als_data_rdy: bool = 6,
            /// Config lock (reads 1, writes ignored)
            config_lock: bool = 7,
        },

        /// PRODUCT ID REVISION - Register #1 (0x81)
        /// Expected value: 0x21 (product 0x2, revision 0x1)
        register ProductId {
            const ADDRESS = 0x81;
            const SIZE_BITS = 8;

            /// Product ID and revision (should read 0x21)
            revision: uint = 0..8,
        },

        /// PROXIMITY RATE - Register #2 (0x82)
        register ProxRate {
            const ADDRESS = 0x82;
            const SIZE_BITS = 8;

            /// Rate of self-timed proximity measurement, 1.95..250 Hz
            rate: uint = 0..3,
            reserved: uint = 3..8,
        },

        /// IR LED CURRENT - Register #3 (0x83)
        register IrLedCurrent {
            const ADDRESS = 0x83;
            const SIZE_BITS = 8;

            /// IR LED current in units of 10 mA (0..=20 usable, 200 mA max)
            current: uint = 0..6,
            /// Fuse program ID (read-only)
            fuse_prog_id: uint = 6..8,
        },

        /// AMBIENT LIGHT PARAMETER - Register #4 (0x84)
        register AmbientParam {
            const ADDRESS = 0x84;
            const SIZE_BITS = 8;

            /// Number of conversions averaged per measurement, 2^n
            averaging: uint = 0..3,
            /// Automatic offset compensation enable
            auto_offset_comp: bool = 3,
            /// Ambient light measurement rate, 1..10 samples/s
            rate: uint = 4..7,
            /// Continuous conversion mode (on-demand measurements only)
            continuous_conversion: bool = 7,
        },

        /// AMBIENT LIGHT RESULT - Registers #5/#6 (0x85 high, 0x86 low)
        register AmbientResult {
            const ADDRESS = 0x85;
            const SIZE_BITS = 16;

            /// 16-bit ambient light measurement result
            value: uint = 0..16,
        },

        /// PROXIMITY RESULT - Registers #7/#8 (0x87 high, 0x88 low)
        register ProxResult {
            const ADDRESS = 0x87;
            const SIZE_BITS = 16;

            /// 16-bit proximity measurement result
            value: uint = 0..16,
        },

        /// INTERRUPT CONTROL - Register #9 (0x89)
        register InterruptCtrl {
            const ADDRESS = 0x89;
            const SIZE_BITS = 8;

            /// Threshold applies to ALS (true) or proximity (false) measurements
            thresh_sel: bool = 0,
            /// Threshold interrupt enable
            thresh_en: bool = 1,
            /// ALS data ready interrupt enable
            als_ready_en: bool = 2,
            /// Proximity data ready interrupt enable
            prox_ready_en: bool = 3,
            reserved: uint = 4..5,
            /// Consecutive out-of-threshold measurements before INT fires, 2^n
            count_exceed: uint = 5..8,
        },

        /// LOW THRESHOLD - Registers #10/#11 (0x8A high, 0x8B low)
        register LowThreshold {
            const ADDRESS = 0x8A;
            const SIZE_BITS = 16;

            /// 16-bit low threshold for the threshold interrupt
            value: uint = 0..16,
        },

        /// HIGH THRESHOLD - Registers #12/#13 (0x8C high, 0x8D low)
        register HighThreshold {
            const ADDRESS = 0x8C;
            const SIZE_BITS = 16;

            /// 16-bit high threshold for the threshold interrupt
            value: uint = 0..16,
        },

        /// INTERRUPT STATUS - Register #14 (0x8E)
        ///
        /// All flags are write-1-to-clear; writing 0 leaves a flag unchanged.
        register InterruptStatus {
            const ADDRESS = 0x8E;
            const SIZE_BITS = 8;

            /// High threshold exceeded
            th_high: bool = 0,
            /// Low threshold exceeded
            th_low: bool = 1,
            /// ALS data ready
            als_ready: bool = 2,
            /// Proximity data ready
            prox_ready: bool = 3,
            reserved: uint = 4..8,
        },

        /// PROXIMITY MODULATOR TIMING ADJUSTMENT - Register #15 (0x8F)
        register ProxAdjust {
            const ADDRESS = 0x8F;
            const SIZE_BITS = 8;

            /// Modulation dead time (advanced tuning)
            modulation_dead_time: uint = 0..3,
            /// Proximity IR test signal carrier frequency
            frequency: uint = 3..5,
            /// Modulation delay time (advanced tuning)
            modulation_delay: uint = 5..8,
        },
    }
);
