/// Data bytes that follow the opcodes in [`super::cmd::Cmd`].
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Driver Output Control (0x01) third byte
    pub const DRIVER_OUTPUT_GATE_SCAN_DEFAULT: u8 = 0x00;

    // Data Entry Mode (0x11) flags
    pub const DATA_ENTRY_INCRY_INCRX: u8 = 0x03; // Y increment, X increment, X first

    // Border Waveform Control (0x3C)
    pub const BORDER_WAVEFORM_FOLLOW_LUT1: u8 = 0x05;

    // Display Update Control 1 (0x21): normal RAM, source output S8..S167
    pub const DISPLAY_UPDATE_CTRL1_RAM_NORMAL: u8 = 0x00;
    pub const DISPLAY_UPDATE_CTRL1_SOURCE_RANGE: u8 = 0x80;

    // Temperature Sensor Control (0x18)
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;

    // Display Update Control 2 (0x22): clock, analog, temp, LUT, display, power off
    pub const DISPLAY_UPDATE_FULL: u8 = 0xF7;

    // Deep Sleep Mode (0x10)
    pub const DEEP_SLEEP_MODE_1: u8 = 0x01; // Retain RAM
}
