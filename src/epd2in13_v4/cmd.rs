/// Controller opcodes used by the 2.13" V4 profile.
///
/// The values come from the vendor reference sequence; keep them as they are.
pub struct Cmd;
impl Cmd {
    // Init
    pub const SW_RESET: u8 = 0x12;
    pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SET_RAMX_START_END: u8 = 0x44;
    pub const SET_RAMY_START_END: u8 = 0x45;
    pub const SET_RAMX_COUNTER: u8 = 0x4E;
    pub const SET_RAMY_COUNTER: u8 = 0x4F;
    pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;
    pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;
    pub const TEMP_CONTROL: u8 = 0x18;

    // Update
    pub const WRITE_BW_DATA: u8 = 0x24;
    pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;
    pub const MASTER_ACTIVATE: u8 = 0x20;

    // Power
    pub const DEEP_SLEEP_MODE: u8 = 0x10;
}

/*
Vendor reference order for init:
0x12 - Software Reset
0x01 - Driver Output Control
0x11 - Data Entry Mode
0x44 - Set RAM X Address Start/End
0x45 - Set RAM Y Address Start/End
0x4E - Set RAM X Address Counter
0x4F - Set RAM Y Address Counter
0x3C - Border Waveform Control
0x21 - Display Update Control
0x18 - Temperature Sensor Control
*/
