//! Wire representation of the audio domain objects
//!
//! This is the IPC-facing model: enumerators are sequential indices,
//! bitmask fields number their bits by enumerator index, tagged unions
//! carry their discriminant explicitly, and sequences are counted. All
//! types here derive the serde traits; the wire model is the only
//! serialized surface of this crate.

use serde::{Deserialize, Serialize};

/// Role a port plays in a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WirePortRole {
    #[default]
    None,
    Source,
    Sink,
}

/// Kind of endpoint a port represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WirePortType {
    #[default]
    None,
    Device,
    Mix,
    Session,
}

/// Optional port-config fields, one bit per enumerator index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireConfigFlag {
    SampleRate,
    ChannelMask,
    Format,
    Gain,
    Flags,
}

impl WireConfigFlag {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::SampleRate),
            1 => Some(Self::ChannelMask),
            2 => Some(Self::Format),
            3 => Some(Self::Gain),
            4 => Some(Self::Flags),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Gain application modes, one bit per enumerator index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireGainMode {
    Joint,
    Channels,
    Ramp,
}

impl WireGainMode {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Joint),
            1 => Some(Self::Channels),
            2 => Some(Self::Ramp),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Capture stream flags, one bit per enumerator index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireInputFlag {
    Fast,
    HwHotword,
    Raw,
    Sync,
    MmapNoirq,
    VoipTx,
    HwAvSync,
    Direct,
}

impl WireInputFlag {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Fast),
            1 => Some(Self::HwHotword),
            2 => Some(Self::Raw),
            3 => Some(Self::Sync),
            4 => Some(Self::MmapNoirq),
            5 => Some(Self::VoipTx),
            6 => Some(Self::HwAvSync),
            7 => Some(Self::Direct),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Playback stream flags, one bit per enumerator index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireOutputFlag {
    Direct,
    Primary,
    Fast,
    DeepBuffer,
    CompressOffload,
    NonBlocking,
    HwAvSync,
    Tts,
    Raw,
    Sync,
    Iec958Nonaudio,
    DirectPcm,
    MmapNoirq,
    VoipRx,
    IncallMusic,
}

impl WireOutputFlag {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Direct),
            1 => Some(Self::Primary),
            2 => Some(Self::Fast),
            3 => Some(Self::DeepBuffer),
            4 => Some(Self::CompressOffload),
            5 => Some(Self::NonBlocking),
            6 => Some(Self::HwAvSync),
            7 => Some(Self::Tts),
            8 => Some(Self::Raw),
            9 => Some(Self::Sync),
            10 => Some(Self::Iec958Nonaudio),
            11 => Some(Self::DirectPcm),
            12 => Some(Self::MmapNoirq),
            13 => Some(Self::VoipRx),
            14 => Some(Self::IncallMusic),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Behavioral attribute flags, one bit per enumerator index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireAttributeFlag {
    AudibilityEnforced,
    Secure,
    Sco,
    Beacon,
    HwAvSync,
    HwHotword,
    BypassInterruptionPolicy,
    BypassMute,
    LowLatency,
    DeepBuffer,
    NoMediaProjection,
    MuteHaptic,
    NoSystemCapture,
    CapturePrivate,
}

impl WireAttributeFlag {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::AudibilityEnforced),
            1 => Some(Self::Secure),
            2 => Some(Self::Sco),
            3 => Some(Self::Beacon),
            4 => Some(Self::HwAvSync),
            5 => Some(Self::HwHotword),
            6 => Some(Self::BypassInterruptionPolicy),
            7 => Some(Self::BypassMute),
            8 => Some(Self::LowLatency),
            9 => Some(Self::DeepBuffer),
            10 => Some(Self::NoMediaProjection),
            11 => Some(Self::MuteHaptic),
            12 => Some(Self::NoSystemCapture),
            13 => Some(Self::CapturePrivate),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Semantic class of a playback stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireStreamType {
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireSourceType {
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireContentType {
    #[default]
    Unknown,
    Speech,
    Music,
    Movie,
    Sonification,
}

/// Usage class carried by attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireUsage {
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireEncapsulationMode {
    #[default]
    None,
    ElementaryStream,
    Handle,
}

/// Lifecycle notifications for an I/O configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireIoConfigEvent {
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
/// `mode` is an index-based mask over [`WireGainMode`]; `channel_mask` is
/// carried opaquely. The number of entries `values` must hold is derived
/// from the mode and the channel mask, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireGainConfig {
    pub index: i32,
    pub mode: i32,
    pub channel_mask: i32,
    pub values: Vec<i32>,
    pub ramp_duration_ms: i32,
}

/// Stream flags for one direction of an I/O path
///
/// The payload of each variant is an index-based mask over
/// [`WireInputFlag`] or [`WireOutputFlag`] respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireIoFlags {
    Input(i32),
    Output(i32),
}

impl WireIoFlags {
    pub fn as_input(&self) -> Option<&i32> {
        match self {
            Self::Input(mask) => Some(mask),
            _ => None,
        }
    }

    pub fn as_output(&self) -> Option<&i32> {
        match self {
            Self::Output(mask) => Some(mask),
            _ => None,
        }
    }
}

impl Default for WireIoFlags {
    fn default() -> Self {
        Self::Input(0)
    }
}

/// Device endpoint details of a port config
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WirePortDeviceExt {
    pub hw_module: i32,
    pub device_type: i32,
    pub address: String,
}

/// Use case of a mix endpoint
///
/// The active variant is implied by the sibling port role; `Empty` is the
/// explicit marker required when the role is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireMixUseCase {
    #[default]
    Empty,
    Stream(WireStreamType),
    Source(WireSourceType),
}

impl WireMixUseCase {
    pub fn as_empty(&self) -> Option<&()> {
        match self {
            Self::Empty => Some(&()),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&WireStreamType> {
        match self {
            Self::Stream(stream) => Some(stream),
            _ => None,
        }
    }

    pub fn as_source(&self) -> Option<&WireSourceType> {
        match self {
            Self::Source(source) => Some(source),
            _ => None,
        }
    }
}

/// Mix endpoint details of a port config
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WirePortMixExt {
    pub hw_module: i32,
    pub handle: i32,
    pub usecase: WireMixUseCase,
}

/// Session endpoint details of a port config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WirePortSessionExt {
    pub session: i32,
}

/// Endpoint-specific extension of a port config
///
/// The active variant is implied by the sibling port type; `Empty` is the
/// explicit marker required when the type is none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WirePortExt {
    #[default]
    Empty,
    Device(WirePortDeviceExt),
    Mix(WirePortMixExt),
    Session(WirePortSessionExt),
}

impl WirePortExt {
    pub fn as_empty(&self) -> Option<&()> {
        match self {
            Self::Empty => Some(&()),
            _ => None,
        }
    }

    pub fn as_device(&self) -> Option<&WirePortDeviceExt> {
        match self {
            Self::Device(device) => Some(device),
            _ => None,
        }
    }

    pub fn as_mix(&self) -> Option<&WirePortMixExt> {
        match self {
            Self::Mix(mix) => Some(mix),
            _ => None,
        }
    }

    pub fn as_session(&self) -> Option<&WirePortSessionExt> {
        match self {
            Self::Session(session) => Some(session),
            _ => None,
        }
    }
}

/// Configuration of one audio port
///
/// `config_mask` is an index-based mask over [`WireConfigFlag`]; only the
/// fields whose bit is set are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WirePortConfig {
    pub id: i32,
    pub role: WirePortRole,
    pub port_type: WirePortType,
    pub config_mask: i32,
    pub sample_rate: i32,
    pub channel_mask: i32,
    pub format: i32,
    pub gain: WireGainConfig,
    pub flags: WireIoFlags,
    pub ext: WirePortExt,
}

/// Connection between a set of source ports and a set of sink ports
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WirePatch {
    pub id: i32,
    pub sinks: Vec<WirePortConfig>,
    pub sources: Vec<WirePortConfig>,
}

/// Snapshot of an open I/O path
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireIoDescriptor {
    pub io_handle: i32,
    pub patch: WirePatch,
    pub sampling_rate: i32,
    pub format: i32,
    pub channel_mask: i32,
    pub frame_count: i64,
    pub frame_count_hal: i64,
    pub latency_ms: i32,
    pub port_id: i32,
}

/// Identity of a client process
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireClientDescriptor {
    pub uid: i32,
    pub pid: i32,
    pub tid: i32,
    pub package_name: String,
}

/// Playback/capture attributes of a stream
///
/// `flags` is an index-based mask over [`WireAttributeFlag`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireAttributes {
    pub content_type: WireContentType,
    pub usage: WireUsage,
    pub source: WireSourceType,
    pub flags: i32,
    pub tags: String,
}

/// Base stream parameters shared by several larger records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireConfigBase {
    pub sample_rate: i32,
    pub channel_mask: i32,
    pub format: i32,
}

/// Parameters of a compressed-offload stream
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireOffloadInfo {
    pub version: i32,
    pub config: WireConfigBase,
    pub stream_type: WireStreamType,
    pub bit_rate: i32,
    pub duration_us: i64,
    pub has_video: bool,
    pub is_streaming: bool,
    pub bit_width: i32,
    pub offload_buffer_size: i32,
    pub usage: WireUsage,
    pub encapsulation_mode: WireEncapsulationMode,
    pub content_id: i32,
    pub sync_id: i32,
}

/// Full stream configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireConfig {
    pub sample_rate: i32,
    pub channel_mask: i32,
    pub format: i32,
    pub offload_info: WireOffloadInfo,
    pub frame_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_index_round_trip() {
        for index in 0..15 {
            let flag = WireOutputFlag::from_index(index).unwrap();
            assert_eq!(flag.index(), index);
        }
        assert_eq!(WireOutputFlag::from_index(15), None);
        assert_eq!(WireInputFlag::from_index(8), None);
        assert_eq!(WireConfigFlag::from_index(5), None);
        assert_eq!(WireGainMode::from_index(3), None);
        assert_eq!(WireAttributeFlag::from_index(14), None);
    }

    #[test]
    fn test_union_projections() {
        let flags = WireIoFlags::Input(0x5);
        assert_eq!(flags.as_input(), Some(&0x5));
        assert_eq!(flags.as_output(), None);

        let ext = WirePortExt::Session(WirePortSessionExt { session: 7 });
        assert!(ext.as_empty().is_none());
        assert_eq!(ext.as_session(), Some(&WirePortSessionExt { session: 7 }));
    }

    #[test]
    fn test_port_config_json_round_trip() {
        let config = WirePortConfig {
            id: 3,
            role: WirePortRole::Source,
            port_type: WirePortType::Device,
            config_mask: 0b111,
            sample_rate: 48000,
            channel_mask: 0x3,
            format: 1,
            ext: WirePortExt::Device(WirePortDeviceExt {
                hw_module: 1,
                device_type: 4,
                address: "card=0;device=1".to_string(),
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WirePortConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
