//! Register definitions for the FXAS21002C
//!
//! The FXAS21002C has a flat register file; all registers are 8 bits wide
//! and addressed directly. Setting bit 7 of the register address on a read
//! enables address auto-increment, which the driver uses to fetch the
//! status byte and all six axis bytes in one bus transaction.
//!
//! Fields that share a register with the operating-mode bits (`CTRL_REG1`)
//! may only be changed while the mode bits are zero (standby); the typed
//! field accessors below guarantee the writes themselves are masked and
//! never disturb neighbouring bits.

device_driver::create_device!(
    device_name: Fxas21002c,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// STATUS - Data status (0x00)
        ///
        /// Mirrors DR_STATUS when the FIFO is disabled. Reading with the
        /// auto-increment flag set starts a burst over the axis registers.
        register Status {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// X-axis data ready
            xdr: bool = 0,
            /// Y-axis data ready
            ydr: bool = 1,
            /// Z-axis data ready
            zdr: bool = 2,
            /// X, Y and Z data ready
            zyxdr: bool = 3,
            /// X-axis data overwritten before it was read
            xow: bool = 4,
            /// Y-axis data overwritten before it was read
            yow: bool = 5,
            /// Z-axis data overwritten before it was read
            zow: bool = 6,
            /// Any axis overwritten before it was read
            zyxow: bool = 7,
        },

        /// OUT_X_MSB - X-axis data high byte (0x01)
        register OutXMsb {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            /// X-axis angular rate high byte
            out_x_msb: uint = 0..8,
        },

        /// OUT_X_LSB - X-axis data low byte (0x02)
        register OutXLsb {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            /// X-axis angular rate low byte
            out_x_lsb: uint = 0..8,
        },

        /// OUT_Y_MSB - Y-axis data high byte (0x03)
        register OutYMsb {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            /// Y-axis angular rate high byte
            out_y_msb: uint = 0..8,
        },

        /// OUT_Y_LSB - Y-axis data low byte (0x04)
        register OutYLsb {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            /// Y-axis angular rate low byte
            out_y_lsb: uint = 0..8,
        },

        /// OUT_Z_MSB - Z-axis data high byte (0x05)
        register OutZMsb {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            /// Z-axis angular rate high byte
            out_z_msb: uint = 0..8,
        },

        /// OUT_Z_LSB - Z-axis data low byte (0x06)
        register OutZLsb {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            /// Z-axis angular rate low byte
            out_z_lsb: uint = 0..8,
        },

        /// WHO_AM_I - Device ID register (0x0C)
        /// Expected value: 0xD7
        register WhoAmI {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;

            /// Device ID (should read 0xD7)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG0 - Control register 0 (0x0D)
        ///
        /// The full-scale field must only be changed while the CTRL_REG1
        /// mode bits are zero (standby or ready).
        register CtrlReg0 {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            /// Full-scale range selection
            /// (11 = 250 dps, 10 = 500 dps, 01 = 1000 dps, 00 = 2000 dps)
            fs: uint = 0..2,
            /// High-pass filter enable
            hpf_en: bool = 2,
            /// High-pass filter cutoff frequency selection
            sel: uint = 3..5,
            /// SPI interface mode selection (0 = 4-wire, 1 = 3-wire)
            spiw: bool = 5,
            /// Low-pass filter bandwidth
            bw: uint = 6..8,
        },

        /// CTRL_REG1 - Control register 1 (0x13)
        register CtrlReg1 {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            /// Operating mode (00 = standby, 01 = ready, 1x = active)
            mode: uint = 0..2,
            /// Output data rate
            /// (000 = 800 Hz, 001 = 400 Hz, 010 = 200 Hz, 011 = 100 Hz,
            ///  100 = 50 Hz, 101 = 25 Hz, 110/111 = 12.5 Hz)
            dr: uint = 2..5,
            /// Self-test enable
            self_test: bool = 5,
            /// Software reset (device self-clears after boot)
            soft_reset: bool = 6,
            reserved_7: uint = 7..8,
        }
    }
);

// Re-export for use by the driver
pub use Fxas21002c as RegisterDevice;
