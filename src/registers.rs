//! Register definitions for the LSM9DS0
//!
//! The LSM9DS0 is two dies in one package, each with its own bus address and
//! register file: the gyroscope sub-device and the accelerometer/magnetometer
//! ("XM") sub-device. This module declares one register map per sub-device;
//! the driver owns one instance of each.
//!
//! Control registers are densely packed, so partial updates must go through
//! the generated `.modify()` path, which reads the register, changes only the
//! named fields, and writes the whole byte back. Call sites never do mask
//! arithmetic by hand.

device_driver::create_device!(
    device_name: Lsm9ds0Gyro,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I_G - Gyro identity register (0x0F)
        /// Expected value: 0xD4
        register WhoAmIG {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0xD4)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1_G - Data rate, bandwidth, power and axis enables (0x20)
        register CtrlReg1G {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// Y-axis enable
            y_enable: bool = 0,
            /// X-axis enable
            x_enable: bool = 1,
            /// Z-axis enable
            z_enable: bool = 2,
            /// Power mode (0 = power-down, 1 = normal/sleep)
            power_up: bool = 3,
            /// DR[1:0] + BW[1:0] output data rate / bandwidth selection
            /// (encoded pairs, see datasheet table 21)
            odr_bw: uint = 4..8,
        },

        /// CTRL_REG2_G - High-pass filter configuration (0x21)
        register CtrlReg2G {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// High-pass filter cutoff frequency (rate dependent)
            hpcf: uint = 0..4,
            /// High-pass filter mode
            hpm: uint = 4..6,
            reserved_7_6: uint = 6..8,
        },

        /// CTRL_REG3_G - Interrupt and DRDY_G pin configuration (0x22)
        register CtrlReg3G {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// FIFO empty interrupt on DRDY_G
            i2_empty: bool = 0,
            /// FIFO overrun interrupt on DRDY_G
            i2_orun: bool = 1,
            /// FIFO watermark interrupt on DRDY_G
            i2_wtm: bool = 2,
            /// Data ready on DRDY_G
            i2_drdy: bool = 3,
            /// Push-pull / open-drain (0 = push-pull)
            pp_od: bool = 4,
            /// Interrupt active level on INT_G (0 = high, 1 = low)
            h_lactive: bool = 5,
            /// Boot status available on INT_G
            i1_boot: bool = 6,
            /// Interrupt enable on INT_G
            i1_int1: bool = 7,
        },

        /// CTRL_REG4_G - Full scale, data update mode, self test (0x23)
        register CtrlReg4G {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// SPI interface mode (0 = 4-wire, 1 = 3-wire)
            sim: bool = 0,
            /// Self-test enable
            self_test: uint = 1..3,
            reserved_3: uint = 3..4,
            /// FS[1:0] full-scale selection (00=245dps, 01=500dps, 10=2000dps)
            full_scale: uint = 4..6,
            /// Big/little endian data selection
            ble: bool = 6,
            /// Block data update (output not updated until both bytes read)
            bdu: bool = 7,
        },

        /// CTRL_REG5_G - FIFO, HPF and INT1 routing (0x24)
        register CtrlReg5G {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Output selection
            out_sel: uint = 0..2,
            /// INT1 selection
            int1_sel: uint = 2..4,
            /// High-pass filter enable
            hpen: bool = 4,
            reserved_5: uint = 5..6,
            /// FIFO enable
            fifo_en: bool = 6,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// REFERENCE_G - Reference value for interrupt generation (0x25)
        register ReferenceG {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            reference: uint = 0..8,
        },

        /// STATUS_REG_G - Gyro data status (0x27)
        register StatusRegG {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// X-axis new data available
            x_new_data: bool = 0,
            /// Y-axis new data available
            y_new_data: bool = 1,
            /// Z-axis new data available
            z_new_data: bool = 2,
            /// X, Y and Z new data available
            new_data: bool = 3,
            /// X-axis data overrun
            x_overrun: bool = 4,
            /// Y-axis data overrun
            y_overrun: bool = 5,
            /// Z-axis data overrun
            z_overrun: bool = 6,
            /// X, Y and Z data overrun
            overrun: bool = 7,
        },

        /// OUT_X_L_G - X-axis angular rate, low byte (0x28)
        register OutXLG {
            const ADDRESS = 0x28;
            const SIZE_BITS = 8;

            out_x_l: uint = 0..8,
        },

        /// OUT_X_H_G - X-axis angular rate, high byte (0x29)
        register OutXHG {
            const ADDRESS = 0x29;
            const SIZE_BITS = 8;

            out_x_h: uint = 0..8,
        },

        /// OUT_Y_L_G - Y-axis angular rate, low byte (0x2A)
        register OutYLG {
            const ADDRESS = 0x2A;
            const SIZE_BITS = 8;

            out_y_l: uint = 0..8,
        },

        /// OUT_Y_H_G - Y-axis angular rate, high byte (0x2B)
        register OutYHG {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 8;

            out_y_h: uint = 0..8,
        },

        /// OUT_Z_L_G - Z-axis angular rate, low byte (0x2C)
        register OutZLG {
            const ADDRESS = 0x2C;
            const SIZE_BITS = 8;

            out_z_l: uint = 0..8,
        },

        /// OUT_Z_H_G - Z-axis angular rate, high byte (0x2D)
        register OutZHG {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;

            out_z_h: uint = 0..8,
        },

        /// FIFO_CTRL_REG_G - FIFO mode and watermark (0x2E)
        register FifoCtrlRegG {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// Watermark level
            watermark: uint = 0..5,
            /// FIFO mode selection
            mode: uint = 5..8,
        },

        /// FIFO_SRC_REG_G - FIFO status (0x2F)
        register FifoSrcRegG {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;

            /// Stored data level
            level: uint = 0..5,
            /// FIFO empty
            empty: bool = 5,
            /// FIFO overrun
            overrun: bool = 6,
            /// Watermark level reached
            watermark: bool = 7,
        },

        /// INT1_CFG_G - INT1 interrupt generation configuration (0x30)
        register Int1CfgG {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_SRC_G - INT1 interrupt source (0x31)
        register Int1SrcG {
            const ADDRESS = 0x31;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_THS_XH_G - INT1 X-axis threshold, high byte (0x32)
        register Int1ThsXhG {
            const ADDRESS = 0x32;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_THS_XL_G - INT1 X-axis threshold, low byte (0x33)
        register Int1ThsXlG {
            const ADDRESS = 0x33;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_THS_YH_G - INT1 Y-axis threshold, high byte (0x34)
        register Int1ThsYhG {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_THS_YL_G - INT1 Y-axis threshold, low byte (0x35)
        register Int1ThsYlG {
            const ADDRESS = 0x35;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_THS_ZH_G - INT1 Z-axis threshold, high byte (0x36)
        register Int1ThsZhG {
            const ADDRESS = 0x36;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_THS_ZL_G - INT1 Z-axis threshold, low byte (0x37)
        register Int1ThsZlG {
            const ADDRESS = 0x37;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT1_DURATION_G - INT1 event duration (0x38)
        register Int1DurationG {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        }
    }
);

// The `create_device!` macro emits a `field_sets` module for each device, so
// the two devices cannot share a module namespace. Keep the XM device in its
// own submodule and re-export its device type alongside the gyro one.
mod xm_device {
    device_driver::create_device!(
    device_name: Lsm9ds0Xm,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// OUT_TEMP_L_XM - Temperature, low byte (0x05)
        register OutTempLXm {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            temp_l: uint = 0..8,
        },

        /// OUT_TEMP_H_XM - Temperature, high nibble (0x06)
        ///
        /// The temperature value is 12-bit two's complement; the upper four
        /// bits of this register are not part of the sample.
        register OutTempHXm {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            temp_h: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// STATUS_REG_M - Magnetometer data status (0x07)
        register StatusRegM {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            /// X-axis new data available
            x_new_data: bool = 0,
            /// Y-axis new data available
            y_new_data: bool = 1,
            /// Z-axis new data available
            z_new_data: bool = 2,
            /// X, Y and Z new data available
            new_data: bool = 3,
            /// X-axis data overrun
            x_overrun: bool = 4,
            /// Y-axis data overrun
            y_overrun: bool = 5,
            /// Z-axis data overrun
            z_overrun: bool = 6,
            /// X, Y and Z data overrun
            overrun: bool = 7,
        },

        /// OUT_X_L_M - X-axis magnetic field, low byte (0x08)
        register OutXLM {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            out_x_l: uint = 0..8,
        },

        /// OUT_X_H_M - X-axis magnetic field, high byte (0x09)
        register OutXHM {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            out_x_h: uint = 0..8,
        },

        /// OUT_Y_L_M - Y-axis magnetic field, low byte (0x0A)
        register OutYLM {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            out_y_l: uint = 0..8,
        },

        /// OUT_Y_H_M - Y-axis magnetic field, high byte (0x0B)
        register OutYHM {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;

            out_y_h: uint = 0..8,
        },

        /// OUT_Z_L_M - Z-axis magnetic field, low byte (0x0C)
        register OutZLM {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;

            out_z_l: uint = 0..8,
        },

        /// OUT_Z_H_M - Z-axis magnetic field, high byte (0x0D)
        register OutZHM {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;

            out_z_h: uint = 0..8,
        },

        /// WHO_AM_I_XM - Accel/mag identity register (0x0F)
        /// Expected value: 0x49
        register WhoAmIXm {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x49)
            who_am_i: uint = 0..8,
        },

        /// INT_CTRL_REG_M - Magnetic interrupt configuration (0x12)
        register IntCtrlRegM {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// Interrupt generation for magnetic data
            mien: bool = 0,
            /// 4D detection enable
            four_d: bool = 1,
            /// Latch interrupt request
            iel: bool = 2,
            /// Interrupt polarity (0 = active-low, 1 = active-high)
            iea: bool = 3,
            /// Push-pull / open-drain
            pp_od: bool = 4,
            /// Z-axis magnetic interrupt enable
            zmien: bool = 5,
            /// Y-axis magnetic interrupt enable
            ymien: bool = 6,
            /// X-axis magnetic interrupt enable
            xmien: bool = 7,
        },

        /// INT_SRC_REG_M - Magnetic interrupt source (0x13)
        register IntSrcRegM {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_THS_L_M - Magnetic interrupt threshold, low byte (0x14)
        register IntThsLM {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_THS_H_M - Magnetic interrupt threshold, high byte (0x15)
        register IntThsHM {
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// OFFSET_X_L_M - Magnetic offset X, low byte (0x16)
        register OffsetXLM {
            const ADDRESS = 0x16;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// OFFSET_X_H_M - Magnetic offset X, high byte (0x17)
        register OffsetXHM {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// OFFSET_Y_L_M - Magnetic offset Y, low byte (0x18)
        register OffsetYLM {
            const ADDRESS = 0x18;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// OFFSET_Y_H_M - Magnetic offset Y, high byte (0x19)
        register OffsetYHM {
            const ADDRESS = 0x19;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// OFFSET_Z_L_M - Magnetic offset Z, low byte (0x1A)
        register OffsetZLM {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// OFFSET_Z_H_M - Magnetic offset Z, high byte (0x1B)
        register OffsetZHM {
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// REFERENCE_X - High-pass filter reference, X (0x1C)
        register ReferenceX {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// REFERENCE_Y - High-pass filter reference, Y (0x1D)
        register ReferenceY {
            const ADDRESS = 0x1D;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// REFERENCE_Z - High-pass filter reference, Z (0x1E)
        register ReferenceZ {
            const ADDRESS = 0x1E;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// CTRL_REG0_XM - FIFO and high-pass routing (0x1F)
        register CtrlReg0Xm {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            /// HPF enabled for interrupt generator 2
            hpis2: bool = 0,
            /// HPF enabled for interrupt generator 1
            hpis1: bool = 1,
            /// HPF enabled for click detection
            hp_click: bool = 2,
            reserved_4_3: uint = 3..5,
            /// FIFO watermark enable
            wtm_en: bool = 5,
            /// FIFO enable
            fifo_en: bool = 6,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// CTRL_REG1_XM - Accel data rate, block update, axis enables (0x20)
        register CtrlReg1Xm {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// X-axis enable
            x_enable: bool = 0,
            /// Y-axis enable
            y_enable: bool = 1,
            /// Z-axis enable
            z_enable: bool = 2,
            /// Block data update for accel and mag
            bdu: bool = 3,
            /// AODR[3:0] acceleration data rate (0000 = power-down)
            odr: uint = 4..8,
        },

        /// CTRL_REG2_XM - Accel anti-alias bandwidth, full scale, self test (0x21)
        register CtrlReg2Xm {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// SPI interface mode
            sim: bool = 0,
            /// Accel self-test enable
            self_test: uint = 1..3,
            /// AFS[2:0] accel full-scale selection
            /// (000=2g, 001=4g, 010=6g, 011=8g, 100=16g)
            full_scale: uint = 3..6,
            /// ABW[1:0] anti-alias filter bandwidth
            bandwidth: uint = 6..8,
        },

        /// CTRL_REG3_XM - INT1_XM pin routing (0x22)
        register CtrlReg3Xm {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// FIFO empty on INT1_XM
            p1_empty: bool = 0,
            /// Mag data ready on INT1_XM
            p1_drdym: bool = 1,
            /// Accel data ready on INT1_XM
            p1_drdya: bool = 2,
            /// Mag interrupt on INT1_XM
            p1_intm: bool = 3,
            /// Inertial interrupt generator 2 on INT1_XM
            p1_int2: bool = 4,
            /// Inertial interrupt generator 1 on INT1_XM
            p1_int1: bool = 5,
            /// Tap interrupt on INT1_XM
            p1_tap: bool = 6,
            /// Boot status on INT1_XM
            p1_boot: bool = 7,
        },

        /// CTRL_REG4_XM - INT2_XM pin routing (0x23)
        register CtrlReg4Xm {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// FIFO watermark on INT2_XM
            p2_wtm: bool = 0,
            /// FIFO overrun on INT2_XM
            p2_overrun: bool = 1,
            /// Mag data ready on INT2_XM
            p2_drdym: bool = 2,
            /// Accel data ready on INT2_XM
            p2_drdya: bool = 3,
            /// Mag interrupt on INT2_XM
            p2_intm: bool = 4,
            /// Inertial interrupt generator 2 on INT2_XM
            p2_int2: bool = 5,
            /// Inertial interrupt generator 1 on INT2_XM
            p2_int1: bool = 6,
            /// Tap interrupt on INT2_XM
            p2_tap: bool = 7,
        },

        /// CTRL_REG5_XM - Temperature enable, mag resolution and data rate (0x24)
        register CtrlReg5Xm {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Latch interrupt request on INT1_SRC
            lir1: bool = 0,
            /// Latch interrupt request on INT2_SRC
            lir2: bool = 1,
            /// M_ODR[2:0] magnetometer data rate
            odr: uint = 2..5,
            /// M_RES[1:0] magnetometer resolution select
            resolution: uint = 5..7,
            /// Temperature sensor enable
            temp_enable: bool = 7,
        },

        /// CTRL_REG6_XM - Magnetometer full scale (0x25)
        register CtrlReg6Xm {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            reserved_4_0: uint = 0..5,
            /// MFS[1:0] magnetic full-scale selection
            /// (00=2Gs, 01=4Gs, 10=8Gs, 11=12Gs)
            full_scale: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// CTRL_REG7_XM - Magnetic sensor mode, low power, filters (0x26)
        register CtrlReg7Xm {
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;

            /// MD[1:0] magnetic sensor mode (00 = continuous conversion)
            mode: uint = 0..2,
            /// Magnetic data low-power mode
            mlp: bool = 2,
            reserved_4_3: uint = 3..5,
            /// Filtered acceleration data selection
            afds: bool = 5,
            /// AHPM[1:0] accel high-pass filter mode
            ahpm: uint = 6..8,
        },

        /// STATUS_REG_A - Accelerometer data status (0x27)
        register StatusRegA {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// X-axis new data available
            x_new_data: bool = 0,
            /// Y-axis new data available
            y_new_data: bool = 1,
            /// Z-axis new data available
            z_new_data: bool = 2,
            /// X, Y and Z new data available
            new_data: bool = 3,
            /// X-axis data overrun
            x_overrun: bool = 4,
            /// Y-axis data overrun
            y_overrun: bool = 5,
            /// Z-axis data overrun
            z_overrun: bool = 6,
            /// X, Y and Z data overrun
            overrun: bool = 7,
        },

        /// OUT_X_L_A - X-axis acceleration, low byte (0x28)
        register OutXLA {
            const ADDRESS = 0x28;
            const SIZE_BITS = 8;

            out_x_l: uint = 0..8,
        },

        /// OUT_X_H_A - X-axis acceleration, high byte (0x29)
        register OutXHA {
            const ADDRESS = 0x29;
            const SIZE_BITS = 8;

            out_x_h: uint = 0..8,
        },

        /// OUT_Y_L_A - Y-axis acceleration, low byte (0x2A)
        register OutYLA {
            const ADDRESS = 0x2A;
            const SIZE_BITS = 8;

            out_y_l: uint = 0..8,
        },

        /// OUT_Y_H_A - Y-axis acceleration, high byte (0x2B)
        register OutYHA {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 8;

            out_y_h: uint = 0..8,
        },

        /// OUT_Z_L_A - Z-axis acceleration, low byte (0x2C)
        register OutZLA {
            const ADDRESS = 0x2C;
            const SIZE_BITS = 8;

            out_z_l: uint = 0..8,
        },

        /// OUT_Z_H_A - Z-axis acceleration, high byte (0x2D)
        register OutZHA {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;

            out_z_h: uint = 0..8,
        },

        /// FIFO_CTRL_REG - FIFO mode and watermark (0x2E)
        register FifoCtrlReg {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// Watermark level
            watermark: uint = 0..5,
            /// FIFO mode selection
            mode: uint = 5..8,
        },

        /// FIFO_SRC_REG - FIFO status (0x2F)
        register FifoSrcReg {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;

            /// Stored data level
            level: uint = 0..5,
            /// FIFO empty
            empty: bool = 5,
            /// FIFO overrun
            overrun: bool = 6,
            /// Watermark level reached
            watermark: bool = 7,
        },

        /// INT_GEN_1_REG - Inertial interrupt generator 1 configuration (0x30)
        register IntGen1Reg {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_1_SRC - Inertial interrupt generator 1 source (0x31)
        register IntGen1Src {
            const ADDRESS = 0x31;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_1_THS - Inertial interrupt generator 1 threshold (0x32)
        register IntGen1Ths {
            const ADDRESS = 0x32;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_1_DURATION - Inertial interrupt generator 1 duration (0x33)
        register IntGen1Duration {
            const ADDRESS = 0x33;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_2_REG - Inertial interrupt generator 2 configuration (0x34)
        register IntGen2Reg {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_2_SRC - Inertial interrupt generator 2 source (0x35)
        register IntGen2Src {
            const ADDRESS = 0x35;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_2_THS - Inertial interrupt generator 2 threshold (0x36)
        register IntGen2Ths {
            const ADDRESS = 0x36;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// INT_GEN_2_DURATION - Inertial interrupt generator 2 duration (0x37)
        register IntGen2Duration {
            const ADDRESS = 0x37;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// CLICK_CFG - Click detection configuration (0x38)
        register ClickCfg {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// CLICK_SRC - Click detection source (0x39)
        register ClickSrc {
            const ADDRESS = 0x39;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// CLICK_THS - Click detection threshold (0x3A)
        register ClickThs {
            const ADDRESS = 0x3A;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// TIME_LIMIT - Click time limit (0x3B)
        register TimeLimit {
            const ADDRESS = 0x3B;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// TIME_LATENCY - Click time latency (0x3C)
        register TimeLatency {
            const ADDRESS = 0x3C;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// TIME_WINDOW - Click time window (0x3D)
        register TimeWindow {
            const ADDRESS = 0x3D;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// ACT_THS - Activity threshold (0x3E)
        register ActThs {
            const ADDRESS = 0x3E;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        },

        /// ACT_DUR - Activity duration (0x3F)
        register ActDur {
            const ADDRESS = 0x3F;
            const SIZE_BITS = 8;

            value: uint = 0..8,
        }
    }
    );
}

pub use xm_device::Lsm9ds0Xm;
