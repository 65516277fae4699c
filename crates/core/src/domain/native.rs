//! Native representation of the audio domain objects
//!
//! This is the process-local model the subsystem works with: flag-style
//! enumerators whose values are already-shifted bits, mask newtypes over
//! `u32`, opaque handle newtypes, and NUL-terminated fixed buffers where
//! the buffer layout itself is the contract. Sequences that the original
//! layout bounds with fixed capacities are held as `Vec`s here; the
//! capacity is enforced once, at the conversion boundary.

/// Upper bound on sink or source ports in a single patch
pub const PATCH_PORTS_MAX: usize = 16;

/// Upper bound on per-channel gain values in a gain config
pub const GAIN_VALUES_MAX: usize = 32;

/// Capacity of a device address buffer, terminator included
pub const DEVICE_ADDRESS_MAX: usize = 32;

/// Capacity of an attribute tags buffer, terminator included
pub const ATTRIBUTE_TAGS_MAX: usize = 256;

/// Offload info layout revision 0.1
pub const OFFLOAD_VERSION_0_1: u16 = 0x0001;
/// Offload info layout revision 0.2, which introduced the sync fields
pub const OFFLOAD_VERSION_0_2: u16 = 0x0002;
/// Layout revision written by this process
pub const OFFLOAD_VERSION_CURRENT: u16 = OFFLOAD_VERSION_0_2;

/// Handle to a loaded hardware module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModuleHandle(pub i32);

/// Handle to an open I/O path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IoHandle(pub i32);

/// Handle to an audio port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PortHandle(pub i32);

/// Handle to an established patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatchHandle(pub i32);

/// Process-unique identifier handed out by the subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UniqueId(pub i32);

/// Handle to a client session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(pub i32);

/// Client process id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pid(pub i32);

/// Client user id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid(pub u32);

/// Channel position mask, carried opaquely across the boundary
///
/// The bit layout differs between capture and playback masks, so the two
/// channel counts are separate operations even though both are positional
/// popcounts today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelMask(pub u32);

impl ChannelMask {
    /// Number of channels named by a capture mask
    pub fn input_channel_count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Number of channels named by a playback mask
    pub fn output_channel_count(self) -> usize {
        self.0.count_ones() as usize
    }
}

/// Sample format, carried opaquely across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Format(pub u32);

/// Device kind bits, carried opaquely across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceType(pub u32);

/// Gain application modes; values are already-shifted bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum GainMode {
    Joint = 1 << 0,
    Channels = 1 << 1,
    Ramp = 1 << 2,
}

impl GainMode {
    pub fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            0x1 => Some(Self::Joint),
            0x2 => Some(Self::Channels),
            0x4 => Some(Self::Ramp),
            _ => None,
        }
    }

    pub fn bit(self) -> u32 {
        self as u32
    }
}

/// Mask of [`GainMode`] bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GainModeMask(pub u32);

impl GainModeMask {
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, mode: GainMode) -> bool {
        self.0 & mode.bit() != 0
    }
}

/// Capture stream flags; values are already-shifted bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum InputFlag {
    Fast = 1 << 0,
    HwHotword = 1 << 1,
    Raw = 1 << 2,
    Sync = 1 << 3,
    MmapNoirq = 1 << 4,
    VoipTx = 1 << 5,
    HwAvSync = 1 << 6,
    Direct = 1 << 7,
}

impl InputFlag {
    pub fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            0x1 => Some(Self::Fast),
            0x2 => Some(Self::HwHotword),
            0x4 => Some(Self::Raw),
            0x8 => Some(Self::Sync),
            0x10 => Some(Self::MmapNoirq),
            0x20 => Some(Self::VoipTx),
            0x40 => Some(Self::HwAvSync),
            0x80 => Some(Self::Direct),
            _ => None,
        }
    }

    pub fn bit(self) -> u32 {
        self as u32
    }
}

/// Mask of [`InputFlag`] bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlagsMask(pub u32);

impl InputFlagsMask {
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, flag: InputFlag) -> bool {
        self.0 & flag.bit() != 0
    }
}

/// Playback stream flags; values are already-shifted bits
///
/// Bits 11 and 12 are reserved by the native numbering and carry no
/// enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OutputFlag {
    Direct = 1 << 0,
    Primary = 1 << 1,
    Fast = 1 << 2,
    DeepBuffer = 1 << 3,
    CompressOffload = 1 << 4,
    NonBlocking = 1 << 5,
    HwAvSync = 1 << 6,
    Tts = 1 << 7,
    Raw = 1 << 8,
    Sync = 1 << 9,
    Iec958Nonaudio = 1 << 10,
    DirectPcm = 1 << 13,
    MmapNoirq = 1 << 14,
    VoipRx = 1 << 15,
    IncallMusic = 1 << 16,
}

impl OutputFlag {
    pub fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            0x1 => Some(Self::Direct),
            0x2 => Some(Self::Primary),
            0x4 => Some(Self::Fast),
            0x8 => Some(Self::DeepBuffer),
            0x10 => Some(Self::CompressOffload),
            0x20 => Some(Self::NonBlocking),
            0x40 => Some(Self::HwAvSync),
            0x80 => Some(Self::Tts),
            0x100 => Some(Self::Raw),
            0x200 => Some(Self::Sync),
            0x400 => Some(Self::Iec958Nonaudio),
            0x2000 => Some(Self::DirectPcm),
            0x4000 => Some(Self::MmapNoirq),
            0x8000 => Some(Self::VoipRx),
            0x10000 => Some(Self::IncallMusic),
            _ => None,
        }
    }

    pub fn bit(self) -> u32 {
        self as u32
    }
}

/// Mask of [`OutputFlag`] bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputFlagsMask(pub u32);

impl OutputFlagsMask {
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, flag: OutputFlag) -> bool {
        self.0 & flag.bit() != 0
    }
}

/// Behavioral attribute flags; values are already-shifted bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AttributeFlag {
    AudibilityEnforced = 1 << 0,
    Secure = 1 << 1,
    Sco = 1 << 2,
    Beacon = 1 << 3,
    HwAvSync = 1 << 4,
    HwHotword = 1 << 5,
    BypassInterruptionPolicy = 1 << 6,
    BypassMute = 1 << 7,
    LowLatency = 1 << 8,
    DeepBuffer = 1 << 9,
    NoMediaProjection = 1 << 10,
    MuteHaptic = 1 << 11,
    NoSystemCapture = 1 << 12,
    CapturePrivate = 1 << 13,
}

impl AttributeFlag {
    pub fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            0x1 => Some(Self::AudibilityEnforced),
            0x2 => Some(Self::Secure),
            0x4 => Some(Self::Sco),
            0x8 => Some(Self::Beacon),
            0x10 => Some(Self::HwAvSync),
            0x20 => Some(Self::HwHotword),
            0x40 => Some(Self::BypassInterruptionPolicy),
            0x80 => Some(Self::BypassMute),
            0x100 => Some(Self::LowLatency),
            0x200 => Some(Self::DeepBuffer),
            0x400 => Some(Self::NoMediaProjection),
            0x800 => Some(Self::MuteHaptic),
            0x1000 => Some(Self::NoSystemCapture),
            0x2000 => Some(Self::CapturePrivate),
            _ => None,
        }
    }

    pub fn bit(self) -> u32 {
        self as u32
    }
}

/// Mask of [`AttributeFlag`] bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeFlagsMask(pub u32);

impl AttributeFlagsMask {
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, flag: AttributeFlag) -> bool {
        self.0 & flag.bit() != 0
    }
}

/// Optional port-config fields; values are already-shifted bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ConfigFlag {
    SampleRate = 1 << 0,
    ChannelMask = 1 << 1,
    Format = 1 << 2,
    Gain = 1 << 3,
    Flags = 1 << 4,
}

impl ConfigFlag {
    pub fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            0x1 => Some(Self::SampleRate),
            0x2 => Some(Self::ChannelMask),
            0x4 => Some(Self::Format),
            0x8 => Some(Self::Gain),
            0x10 => Some(Self::Flags),
            _ => None,
        }
    }

    pub fn bit(self) -> u32 {
        self as u32
    }
}

/// Mask of [`ConfigFlag`] bits, gating the optional port-config fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigMask(pub u32);

impl ConfigMask {
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, flag: ConfigFlag) -> bool {
        self.0 & flag.bit() != 0
    }
}

/// Role a port plays in a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortRole {
    #[default]
    None,
    Source,
    Sink,
}

/// Kind of endpoint a port represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortType {
    #[default]
    None,
    Device,
    Mix,
    Session,
}

/// Semantic class of a playback stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamType {
    #[default]
    Default,
    VoiceCall,
    System,
    Ring,
    Music,
    Alarm,
    Notification,
    BluetoothSco,
    EnforcedAudible,
    Dtmf,
    Tts,
    Accessibility,
    Assistant,
    Rerouting,
    Patch,
    CallAssistant,
}

/// Semantic class of a capture source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    #[default]
    Invalid,
    Default,
    Mic,
    VoiceUplink,
    VoiceDownlink,
    VoiceCall,
    Camcorder,
    VoiceRecognition,
    VoiceCommunication,
    RemoteSubmix,
    Unprocessed,
    VoicePerformance,
    EchoReference,
    FmTuner,
    Hotword,
}

/// Content class carried by attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Unknown,
    Speech,
    Music,
    Movie,
    Sonification,
}

/// Usage class carried by attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Usage {
    #[default]
    Unknown,
    Media,
    VoiceCommunication,
    VoiceCommunicationSignalling,
    Alarm,
    Notification,
    NotificationTelephonyRingtone,
    NotificationCommunicationRequest,
    NotificationCommunicationInstant,
    NotificationCommunicationDelayed,
    NotificationEvent,
    AssistanceAccessibility,
    AssistanceNavigationGuidance,
    AssistanceSonification,
    Game,
    VirtualSource,
    Assistant,
    CallAssistant,
    Emergency,
    Safety,
    VehicleStatus,
    Announcement,
}

/// Encapsulation applied to an offloaded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncapsulationMode {
    #[default]
    None,
    ElementaryStream,
    Handle,
}

/// Lifecycle notifications for an I/O configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoConfigEvent {
    OutputRegistered,
    OutputOpened,
    OutputClosed,
    OutputConfigChanged,
    InputRegistered,
    InputOpened,
    InputClosed,
    InputConfigChanged,
    ClientStarted,
}

/// Gain configuration for one port
///
/// `values` holds one entry per addressed channel, or a single entry when
/// the joint mode bit is set; the expected length is derived at the
/// conversion boundary and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GainConfig {
    pub index: i32,
    pub mode: GainModeMask,
    pub channel_mask: ChannelMask,
    pub values: Vec<i32>,
    pub ramp_duration_ms: u32,
}

/// Stream flags for one direction of an I/O path
///
/// The active variant is implied by the surrounding port's role and type,
/// never stored alongside the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFlags {
    Input(InputFlagsMask),
    Output(OutputFlagsMask),
}

impl IoFlags {
    pub fn as_input(&self) -> Option<&InputFlagsMask> {
        match self {
            Self::Input(mask) => Some(mask),
            _ => None,
        }
    }

    pub fn as_output(&self) -> Option<&OutputFlagsMask> {
        match self {
            Self::Output(mask) => Some(mask),
            _ => None,
        }
    }
}

impl Default for IoFlags {
    fn default() -> Self {
        Self::Input(InputFlagsMask::default())
    }
}

/// Device endpoint details of a port config
///
/// `address` is NUL-terminated inside its fixed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortConfigDeviceExt {
    pub hw_module: ModuleHandle,
    pub device_type: DeviceType,
    pub address: [u8; DEVICE_ADDRESS_MAX],
}

/// Use case of a mix endpoint, selected by the surrounding port role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixUseCase {
    #[default]
    None,
    Stream(StreamType),
    Source(SourceType),
}

impl MixUseCase {
    pub fn as_empty(&self) -> Option<&()> {
        match self {
            Self::None => Some(&()),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&StreamType> {
        match self {
            Self::Stream(stream) => Some(stream),
            _ => None,
        }
    }

    pub fn as_source(&self) -> Option<&SourceType> {
        match self {
            Self::Source(source) => Some(source),
            _ => None,
        }
    }
}

/// Mix endpoint details of a port config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortConfigMixExt {
    pub hw_module: ModuleHandle,
    pub handle: IoHandle,
    pub usecase: MixUseCase,
}

/// Session endpoint details of a port config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortConfigSessionExt {
    pub session: SessionId,
}

/// Endpoint-specific extension of a port config, selected by the
/// surrounding port type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortConfigExt {
    #[default]
    None,
    Device(PortConfigDeviceExt),
    Mix(PortConfigMixExt),
    Session(PortConfigSessionExt),
}

impl PortConfigExt {
    pub fn as_empty(&self) -> Option<&()> {
        match self {
            Self::None => Some(&()),
            _ => None,
        }
    }

    pub fn as_device(&self) -> Option<&PortConfigDeviceExt> {
        match self {
            Self::Device(device) => Some(device),
            _ => None,
        }
    }

    pub fn as_mix(&self) -> Option<&PortConfigMixExt> {
        match self {
            Self::Mix(mix) => Some(mix),
            _ => None,
        }
    }

    pub fn as_session(&self) -> Option<&PortConfigSessionExt> {
        match self {
            Self::Session(session) => Some(session),
            _ => None,
        }
    }
}

/// Configuration of one audio port
///
/// Fields gated by `config_mask` hold their default value when the
/// corresponding bit is clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortConfig {
    pub id: PortHandle,
    pub role: PortRole,
    pub port_type: PortType,
    pub config_mask: ConfigMask,
    pub sample_rate: u32,
    pub channel_mask: ChannelMask,
    pub format: Format,
    pub gain: GainConfig,
    pub flags: IoFlags,
    pub ext: PortConfigExt,
}

/// Connection between a set of source ports and a set of sink ports
///
/// Each collection is bounded by [`PATCH_PORTS_MAX`] at the conversion
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch {
    pub id: PatchHandle,
    pub sinks: Vec<PortConfig>,
    pub sources: Vec<PortConfig>,
}

/// Snapshot of an open I/O path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IoDescriptor {
    pub io_handle: IoHandle,
    pub patch: Patch,
    pub sampling_rate: u32,
    pub format: Format,
    pub channel_mask: ChannelMask,
    pub frame_count: usize,
    pub frame_count_hal: usize,
    pub latency_ms: u32,
    pub port_id: PortHandle,
}

/// Identity of a client process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientDescriptor {
    pub uid: Uid,
    pub pid: Pid,
    pub tid: Pid,
    pub package_name: String,
}

/// Playback/capture attributes of a stream
///
/// `tags` is NUL-terminated inside its fixed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub content_type: ContentType,
    pub usage: Usage,
    pub source: SourceType,
    pub flags: AttributeFlagsMask,
    pub tags: [u8; ATTRIBUTE_TAGS_MAX],
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            content_type: ContentType::default(),
            usage: Usage::default(),
            source: SourceType::default(),
            flags: AttributeFlagsMask::default(),
            tags: [0; ATTRIBUTE_TAGS_MAX],
        }
    }
}

/// Fields the 0.2 offload layout revision introduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffloadSync {
    pub encapsulation_mode: EncapsulationMode,
    pub content_id: i32,
    pub sync_id: i32,
}

/// Parameters of a compressed-offload stream
///
/// `sync` is populated only when `version` covers the 0.2 fields; older
/// values carry `None` and must not be read past their revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffloadInfo {
    pub version: u16,
    pub sample_rate: u32,
    pub channel_mask: ChannelMask,
    pub format: Format,
    pub stream_type: StreamType,
    pub bit_rate: u32,
    pub duration_us: i64,
    pub has_video: bool,
    pub is_streaming: bool,
    pub bit_width: u32,
    pub offload_buffer_size: u32,
    pub usage: Usage,
    pub sync: Option<OffloadSync>,
}

impl Default for OffloadInfo {
    fn default() -> Self {
        Self {
            version: OFFLOAD_VERSION_CURRENT,
            sample_rate: 0,
            channel_mask: ChannelMask::default(),
            format: Format::default(),
            stream_type: StreamType::default(),
            bit_rate: 0,
            duration_us: 0,
            has_video: false,
            is_streaming: false,
            bit_width: 16,
            offload_buffer_size: 0,
            usage: Usage::default(),
            sync: Some(OffloadSync::default()),
        }
    }
}

/// Full stream configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub sample_rate: u32,
    pub channel_mask: ChannelMask,
    pub format: Format,
    pub offload_info: OffloadInfo,
    pub frame_count: usize,
}

/// Base stream parameters shared by several larger records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigBase {
    pub sample_rate: u32,
    pub channel_mask: ChannelMask,
    pub format: Format,
}
