//! Enumerator tables and mask instantiations
//!
//! The 1:1 enumerator mappings between the wire and native models, plus
//! the [`translate_mask`] wrappers that pair each index-based wire mask
//! with its flag-based native counterpart. Everything here is mechanical;
//! the interesting machinery lives in the parent module.

use super::{convert_reinterpret, translate_mask, ConversionError, Result};
use crate::domain::native::*;
use crate::domain::wire::*;

// Handles and other opaque identifiers cross the boundary by bit
// reinterpretation; they carry identity, not numeric meaning.

pub fn module_handle_from_wire(wire: i32) -> Result<ModuleHandle> {
    Ok(ModuleHandle(convert_reinterpret(wire)?))
}

pub fn module_handle_to_wire(native: ModuleHandle) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn io_handle_from_wire(wire: i32) -> Result<IoHandle> {
    Ok(IoHandle(convert_reinterpret(wire)?))
}

pub fn io_handle_to_wire(native: IoHandle) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn port_handle_from_wire(wire: i32) -> Result<PortHandle> {
    Ok(PortHandle(convert_reinterpret(wire)?))
}

pub fn port_handle_to_wire(native: PortHandle) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn patch_handle_from_wire(wire: i32) -> Result<PatchHandle> {
    Ok(PatchHandle(convert_reinterpret(wire)?))
}

pub fn patch_handle_to_wire(native: PatchHandle) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn unique_id_from_wire(wire: i32) -> Result<UniqueId> {
    Ok(UniqueId(convert_reinterpret(wire)?))
}

pub fn unique_id_to_wire(native: UniqueId) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn session_id_from_wire(wire: i32) -> Result<SessionId> {
    Ok(SessionId(convert_reinterpret(wire)?))
}

pub fn session_id_to_wire(native: SessionId) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn pid_from_wire(wire: i32) -> Result<Pid> {
    Ok(Pid(convert_reinterpret(wire)?))
}

pub fn pid_to_wire(native: Pid) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn uid_from_wire(wire: i32) -> Result<Uid> {
    Ok(Uid(convert_reinterpret(wire)?))
}

pub fn uid_to_wire(native: Uid) -> Result<i32> {
    convert_reinterpret(native.0)
}

// TODO: decide whether channel masks should translate bit by bit. The
// positional layout differs between capture and playback masks, so a
// semantic translation needs the surrounding direction; until that is
// pinned down the mask crosses the boundary opaquely.
pub fn channel_mask_from_wire(wire: i32) -> Result<ChannelMask> {
    Ok(ChannelMask(convert_reinterpret(wire)?))
}

pub fn channel_mask_to_wire(native: ChannelMask) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn device_type_from_wire(wire: i32) -> Result<DeviceType> {
    Ok(DeviceType(convert_reinterpret(wire)?))
}

pub fn device_type_to_wire(native: DeviceType) -> Result<i32> {
    convert_reinterpret(native.0)
}

/// Both models keep the format namespace in sync, so the value itself
/// crosses unchanged.
pub fn format_from_wire(wire: i32) -> Result<Format> {
    Ok(Format(convert_reinterpret(wire)?))
}

pub fn format_to_wire(native: Format) -> Result<i32> {
    convert_reinterpret(native.0)
}

pub fn port_role_from_wire(wire: WirePortRole) -> Result<PortRole> {
    Ok(match wire {
        WirePortRole::None => PortRole::None,
        WirePortRole::Source => PortRole::Source,
        WirePortRole::Sink => PortRole::Sink,
    })
}

pub fn port_role_to_wire(native: PortRole) -> Result<WirePortRole> {
    Ok(match native {
        PortRole::None => WirePortRole::None,
        PortRole::Source => WirePortRole::Source,
        PortRole::Sink => WirePortRole::Sink,
    })
}

pub fn port_type_from_wire(wire: WirePortType) -> Result<PortType> {
    Ok(match wire {
        WirePortType::None => PortType::None,
        WirePortType::Device => PortType::Device,
        WirePortType::Mix => PortType::Mix,
        WirePortType::Session => PortType::Session,
    })
}

pub fn port_type_to_wire(native: PortType) -> Result<WirePortType> {
    Ok(match native {
        PortType::None => WirePortType::None,
        PortType::Device => WirePortType::Device,
        PortType::Mix => WirePortType::Mix,
        PortType::Session => WirePortType::Session,
    })
}

pub fn gain_mode_from_wire(wire: WireGainMode) -> Result<GainMode> {
    Ok(match wire {
        WireGainMode::Joint => GainMode::Joint,
        WireGainMode::Channels => GainMode::Channels,
        WireGainMode::Ramp => GainMode::Ramp,
    })
}

pub fn gain_mode_to_wire(native: GainMode) -> Result<WireGainMode> {
    Ok(match native {
        GainMode::Joint => WireGainMode::Joint,
        GainMode::Channels => WireGainMode::Channels,
        GainMode::Ramp => WireGainMode::Ramp,
    })
}

pub fn input_flag_from_wire(wire: WireInputFlag) -> Result<InputFlag> {
    Ok(match wire {
        WireInputFlag::Fast => InputFlag::Fast,
        WireInputFlag::HwHotword => InputFlag::HwHotword,
        WireInputFlag::Raw => InputFlag::Raw,
        WireInputFlag::Sync => InputFlag::Sync,
        WireInputFlag::MmapNoirq => InputFlag::MmapNoirq,
        WireInputFlag::VoipTx => InputFlag::VoipTx,
        WireInputFlag::HwAvSync => InputFlag::HwAvSync,
        WireInputFlag::Direct => InputFlag::Direct,
    })
}

pub fn input_flag_to_wire(native: InputFlag) -> Result<WireInputFlag> {
    Ok(match native {
        InputFlag::Fast => WireInputFlag::Fast,
        InputFlag::HwHotword => WireInputFlag::HwHotword,
        InputFlag::Raw => WireInputFlag::Raw,
        InputFlag::Sync => WireInputFlag::Sync,
        InputFlag::MmapNoirq => WireInputFlag::MmapNoirq,
        InputFlag::VoipTx => WireInputFlag::VoipTx,
        InputFlag::HwAvSync => WireInputFlag::HwAvSync,
        InputFlag::Direct => WireInputFlag::Direct,
    })
}

pub fn output_flag_from_wire(wire: WireOutputFlag) -> Result<OutputFlag> {
    Ok(match wire {
        WireOutputFlag::Direct => OutputFlag::Direct,
        WireOutputFlag::Primary => OutputFlag::Primary,
        WireOutputFlag::Fast => OutputFlag::Fast,
        WireOutputFlag::DeepBuffer => OutputFlag::DeepBuffer,
        WireOutputFlag::CompressOffload => OutputFlag::CompressOffload,
        WireOutputFlag::NonBlocking => OutputFlag::NonBlocking,
        WireOutputFlag::HwAvSync => OutputFlag::HwAvSync,
        WireOutputFlag::Tts => OutputFlag::Tts,
        WireOutputFlag::Raw => OutputFlag::Raw,
        WireOutputFlag::Sync => OutputFlag::Sync,
        WireOutputFlag::Iec958Nonaudio => OutputFlag::Iec958Nonaudio,
        WireOutputFlag::DirectPcm => OutputFlag::DirectPcm,
        WireOutputFlag::MmapNoirq => OutputFlag::MmapNoirq,
        WireOutputFlag::VoipRx => OutputFlag::VoipRx,
        WireOutputFlag::IncallMusic => OutputFlag::IncallMusic,
    })
}

pub fn output_flag_to_wire(native: OutputFlag) -> Result<WireOutputFlag> {
    Ok(match native {
        OutputFlag::Direct => WireOutputFlag::Direct,
        OutputFlag::Primary => WireOutputFlag::Primary,
        OutputFlag::Fast => WireOutputFlag::Fast,
        OutputFlag::DeepBuffer => WireOutputFlag::DeepBuffer,
        OutputFlag::CompressOffload => WireOutputFlag::CompressOffload,
        OutputFlag::NonBlocking => WireOutputFlag::NonBlocking,
        OutputFlag::HwAvSync => WireOutputFlag::HwAvSync,
        OutputFlag::Tts => WireOutputFlag::Tts,
        OutputFlag::Raw => WireOutputFlag::Raw,
        OutputFlag::Sync => WireOutputFlag::Sync,
        OutputFlag::Iec958Nonaudio => WireOutputFlag::Iec958Nonaudio,
        OutputFlag::DirectPcm => WireOutputFlag::DirectPcm,
        OutputFlag::MmapNoirq => WireOutputFlag::MmapNoirq,
        OutputFlag::VoipRx => WireOutputFlag::VoipRx,
        OutputFlag::IncallMusic => WireOutputFlag::IncallMusic,
    })
}

pub fn attribute_flag_from_wire(wire: WireAttributeFlag) -> Result<AttributeFlag> {
    Ok(match wire {
        WireAttributeFlag::AudibilityEnforced => AttributeFlag::AudibilityEnforced,
        WireAttributeFlag::Secure => AttributeFlag::Secure,
        WireAttributeFlag::Sco => AttributeFlag::Sco,
        WireAttributeFlag::Beacon => AttributeFlag::Beacon,
        WireAttributeFlag::HwAvSync => AttributeFlag::HwAvSync,
        WireAttributeFlag::HwHotword => AttributeFlag::HwHotword,
        WireAttributeFlag::BypassInterruptionPolicy => AttributeFlag::BypassInterruptionPolicy,
        WireAttributeFlag::BypassMute => AttributeFlag::BypassMute,
        WireAttributeFlag::LowLatency => AttributeFlag::LowLatency,
        WireAttributeFlag::DeepBuffer => AttributeFlag::DeepBuffer,
        WireAttributeFlag::NoMediaProjection => AttributeFlag::NoMediaProjection,
        WireAttributeFlag::MuteHaptic => AttributeFlag::MuteHaptic,
        WireAttributeFlag::NoSystemCapture => AttributeFlag::NoSystemCapture,
        WireAttributeFlag::CapturePrivate => AttributeFlag::CapturePrivate,
    })
}

pub fn attribute_flag_to_wire(native: AttributeFlag) -> Result<WireAttributeFlag> {
    Ok(match native {
        AttributeFlag::AudibilityEnforced => WireAttributeFlag::AudibilityEnforced,
        AttributeFlag::Secure => WireAttributeFlag::Secure,
        AttributeFlag::Sco => WireAttributeFlag::Sco,
        AttributeFlag::Beacon => WireAttributeFlag::Beacon,
        AttributeFlag::HwAvSync => WireAttributeFlag::HwAvSync,
        AttributeFlag::HwHotword => WireAttributeFlag::HwHotword,
        AttributeFlag::BypassInterruptionPolicy => WireAttributeFlag::BypassInterruptionPolicy,
        AttributeFlag::BypassMute => WireAttributeFlag::BypassMute,
        AttributeFlag::LowLatency => WireAttributeFlag::LowLatency,
        AttributeFlag::DeepBuffer => WireAttributeFlag::DeepBuffer,
        AttributeFlag::NoMediaProjection => WireAttributeFlag::NoMediaProjection,
        AttributeFlag::MuteHaptic => WireAttributeFlag::MuteHaptic,
        AttributeFlag::NoSystemCapture => WireAttributeFlag::NoSystemCapture,
        AttributeFlag::CapturePrivate => WireAttributeFlag::CapturePrivate,
    })
}

pub fn config_flag_from_wire(wire: WireConfigFlag) -> Result<ConfigFlag> {
    Ok(match wire {
        WireConfigFlag::SampleRate => ConfigFlag::SampleRate,
        WireConfigFlag::ChannelMask => ConfigFlag::ChannelMask,
        WireConfigFlag::Format => ConfigFlag::Format,
        WireConfigFlag::Gain => ConfigFlag::Gain,
        WireConfigFlag::Flags => ConfigFlag::Flags,
    })
}

pub fn config_flag_to_wire(native: ConfigFlag) -> Result<WireConfigFlag> {
    Ok(match native {
        ConfigFlag::SampleRate => WireConfigFlag::SampleRate,
        ConfigFlag::ChannelMask => WireConfigFlag::ChannelMask,
        ConfigFlag::Format => WireConfigFlag::Format,
        ConfigFlag::Gain => WireConfigFlag::Gain,
        ConfigFlag::Flags => WireConfigFlag::Flags,
    })
}

pub fn stream_type_from_wire(wire: WireStreamType) -> Result<StreamType> {
    Ok(match wire {
        WireStreamType::Default => StreamType::Default,
        WireStreamType::VoiceCall => StreamType::VoiceCall,
        WireStreamType::System => StreamType::System,
        WireStreamType::Ring => StreamType::Ring,
        WireStreamType::Music => StreamType::Music,
        WireStreamType::Alarm => StreamType::Alarm,
        WireStreamType::Notification => StreamType::Notification,
        WireStreamType::BluetoothSco => StreamType::BluetoothSco,
        WireStreamType::EnforcedAudible => StreamType::EnforcedAudible,
        WireStreamType::Dtmf => StreamType::Dtmf,
        WireStreamType::Tts => StreamType::Tts,
        WireStreamType::Accessibility => StreamType::Accessibility,
        WireStreamType::Assistant => StreamType::Assistant,
        WireStreamType::Rerouting => StreamType::Rerouting,
        WireStreamType::Patch => StreamType::Patch,
        WireStreamType::CallAssistant => StreamType::CallAssistant,
    })
}

pub fn stream_type_to_wire(native: StreamType) -> Result<WireStreamType> {
    Ok(match native {
        StreamType::Default => WireStreamType::Default,
        StreamType::VoiceCall => WireStreamType::VoiceCall,
        StreamType::System => WireStreamType::System,
        StreamType::Ring => WireStreamType::Ring,
        StreamType::Music => WireStreamType::Music,
        StreamType::Alarm => WireStreamType::Alarm,
        StreamType::Notification => WireStreamType::Notification,
        StreamType::BluetoothSco => WireStreamType::BluetoothSco,
        StreamType::EnforcedAudible => WireStreamType::EnforcedAudible,
        StreamType::Dtmf => WireStreamType::Dtmf,
        StreamType::Tts => WireStreamType::Tts,
        StreamType::Accessibility => WireStreamType::Accessibility,
        StreamType::Assistant => WireStreamType::Assistant,
        StreamType::Rerouting => WireStreamType::Rerouting,
        StreamType::Patch => WireStreamType::Patch,
        StreamType::CallAssistant => WireStreamType::CallAssistant,
    })
}

pub fn source_type_from_wire(wire: WireSourceType) -> Result<SourceType> {
    Ok(match wire {
        WireSourceType::Invalid => SourceType::Invalid,
        WireSourceType::Default => SourceType::Default,
        WireSourceType::Mic => SourceType::Mic,
        WireSourceType::VoiceUplink => SourceType::VoiceUplink,
        WireSourceType::VoiceDownlink => SourceType::VoiceDownlink,
        WireSourceType::VoiceCall => SourceType::VoiceCall,
        WireSourceType::Camcorder => SourceType::Camcorder,
        WireSourceType::VoiceRecognition => SourceType::VoiceRecognition,
        WireSourceType::VoiceCommunication => SourceType::VoiceCommunication,
        WireSourceType::RemoteSubmix => SourceType::RemoteSubmix,
        WireSourceType::Unprocessed => SourceType::Unprocessed,
        WireSourceType::VoicePerformance => SourceType::VoicePerformance,
        WireSourceType::EchoReference => SourceType::EchoReference,
        WireSourceType::FmTuner => SourceType::FmTuner,
        WireSourceType::Hotword => SourceType::Hotword,
    })
}

pub fn source_type_to_wire(native: SourceType) -> Result<WireSourceType> {
    Ok(match native {
        SourceType::Invalid => WireSourceType::Invalid,
        SourceType::Default => WireSourceType::Default,
        SourceType::Mic => WireSourceType::Mic,
        SourceType::VoiceUplink => WireSourceType::VoiceUplink,
        SourceType::VoiceDownlink => WireSourceType::VoiceDownlink,
        SourceType::VoiceCall => WireSourceType::VoiceCall,
        SourceType::Camcorder => WireSourceType::Camcorder,
        SourceType::VoiceRecognition => WireSourceType::VoiceRecognition,
        SourceType::VoiceCommunication => WireSourceType::VoiceCommunication,
        SourceType::RemoteSubmix => WireSourceType::RemoteSubmix,
        SourceType::Unprocessed => WireSourceType::Unprocessed,
        SourceType::VoicePerformance => WireSourceType::VoicePerformance,
        SourceType::EchoReference => WireSourceType::EchoReference,
        SourceType::FmTuner => WireSourceType::FmTuner,
        SourceType::Hotword => WireSourceType::Hotword,
    })
}

pub fn content_type_from_wire(wire: WireContentType) -> Result<ContentType> {
    Ok(match wire {
        WireContentType::Unknown => ContentType::Unknown,
        WireContentType::Speech => ContentType::Speech,
        WireContentType::Music => ContentType::Music,
        WireContentType::Movie => ContentType::Movie,
        WireContentType::Sonification => ContentType::Sonification,
    })
}

pub fn content_type_to_wire(native: ContentType) -> Result<WireContentType> {
    Ok(match native {
        ContentType::Unknown => WireContentType::Unknown,
        ContentType::Speech => WireContentType::Speech,
        ContentType::Music => WireContentType::Music,
        ContentType::Movie => WireContentType::Movie,
        ContentType::Sonification => WireContentType::Sonification,
    })
}

pub fn usage_from_wire(wire: WireUsage) -> Result<Usage> {
    Ok(match wire {
        WireUsage::Unknown => Usage::Unknown,
        WireUsage::Media => Usage::Media,
        WireUsage::VoiceCommunication => Usage::VoiceCommunication,
        WireUsage::VoiceCommunicationSignalling => Usage::VoiceCommunicationSignalling,
        WireUsage::Alarm => Usage::Alarm,
        WireUsage::Notification => Usage::Notification,
        WireUsage::NotificationTelephonyRingtone => Usage::NotificationTelephonyRingtone,
        WireUsage::NotificationCommunicationRequest => Usage::NotificationCommunicationRequest,
        WireUsage::NotificationCommunicationInstant => Usage::NotificationCommunicationInstant,
        WireUsage::NotificationCommunicationDelayed => Usage::NotificationCommunicationDelayed,
        WireUsage::NotificationEvent => Usage::NotificationEvent,
        WireUsage::AssistanceAccessibility => Usage::AssistanceAccessibility,
        WireUsage::AssistanceNavigationGuidance => Usage::AssistanceNavigationGuidance,
        WireUsage::AssistanceSonification => Usage::AssistanceSonification,
        WireUsage::Game => Usage::Game,
        WireUsage::VirtualSource => Usage::VirtualSource,
        WireUsage::Assistant => Usage::Assistant,
        WireUsage::CallAssistant => Usage::CallAssistant,
        WireUsage::Emergency => Usage::Emergency,
        WireUsage::Safety => Usage::Safety,
        WireUsage::VehicleStatus => Usage::VehicleStatus,
        WireUsage::Announcement => Usage::Announcement,
    })
}

pub fn usage_to_wire(native: Usage) -> Result<WireUsage> {
    Ok(match native {
        Usage::Unknown => WireUsage::Unknown,
        Usage::Media => WireUsage::Media,
        Usage::VoiceCommunication => WireUsage::VoiceCommunication,
        Usage::VoiceCommunicationSignalling => WireUsage::VoiceCommunicationSignalling,
        Usage::Alarm => WireUsage::Alarm,
        Usage::Notification => WireUsage::Notification,
        Usage::NotificationTelephonyRingtone => WireUsage::NotificationTelephonyRingtone,
        Usage::NotificationCommunicationRequest => WireUsage::NotificationCommunicationRequest,
        Usage::NotificationCommunicationInstant => WireUsage::NotificationCommunicationInstant,
        Usage::NotificationCommunicationDelayed => WireUsage::NotificationCommunicationDelayed,
        Usage::NotificationEvent => WireUsage::NotificationEvent,
        Usage::AssistanceAccessibility => WireUsage::AssistanceAccessibility,
        Usage::AssistanceNavigationGuidance => WireUsage::AssistanceNavigationGuidance,
        Usage::AssistanceSonification => WireUsage::AssistanceSonification,
        Usage::Game => WireUsage::Game,
        Usage::VirtualSource => WireUsage::VirtualSource,
        Usage::Assistant => WireUsage::Assistant,
        Usage::CallAssistant => WireUsage::CallAssistant,
        Usage::Emergency => WireUsage::Emergency,
        Usage::Safety => WireUsage::Safety,
        Usage::VehicleStatus => WireUsage::VehicleStatus,
        Usage::Announcement => WireUsage::Announcement,
    })
}

pub fn encapsulation_mode_from_wire(wire: WireEncapsulationMode) -> Result<EncapsulationMode> {
    Ok(match wire {
        WireEncapsulationMode::None => EncapsulationMode::None,
        WireEncapsulationMode::ElementaryStream => EncapsulationMode::ElementaryStream,
        WireEncapsulationMode::Handle => EncapsulationMode::Handle,
    })
}

pub fn encapsulation_mode_to_wire(native: EncapsulationMode) -> Result<WireEncapsulationMode> {
    Ok(match native {
        EncapsulationMode::None => WireEncapsulationMode::None,
        EncapsulationMode::ElementaryStream => WireEncapsulationMode::ElementaryStream,
        EncapsulationMode::Handle => WireEncapsulationMode::Handle,
    })
}

pub fn io_config_event_from_wire(wire: WireIoConfigEvent) -> Result<IoConfigEvent> {
    Ok(match wire {
        WireIoConfigEvent::OutputRegistered => IoConfigEvent::OutputRegistered,
        WireIoConfigEvent::OutputOpened => IoConfigEvent::OutputOpened,
        WireIoConfigEvent::OutputClosed => IoConfigEvent::OutputClosed,
        WireIoConfigEvent::OutputConfigChanged => IoConfigEvent::OutputConfigChanged,
        WireIoConfigEvent::InputRegistered => IoConfigEvent::InputRegistered,
        WireIoConfigEvent::InputOpened => IoConfigEvent::InputOpened,
        WireIoConfigEvent::InputClosed => IoConfigEvent::InputClosed,
        WireIoConfigEvent::InputConfigChanged => IoConfigEvent::InputConfigChanged,
        WireIoConfigEvent::ClientStarted => IoConfigEvent::ClientStarted,
    })
}

pub fn io_config_event_to_wire(native: IoConfigEvent) -> Result<WireIoConfigEvent> {
    Ok(match native {
        IoConfigEvent::OutputRegistered => WireIoConfigEvent::OutputRegistered,
        IoConfigEvent::OutputOpened => WireIoConfigEvent::OutputOpened,
        IoConfigEvent::OutputClosed => WireIoConfigEvent::OutputClosed,
        IoConfigEvent::OutputConfigChanged => WireIoConfigEvent::OutputConfigChanged,
        IoConfigEvent::InputRegistered => WireIoConfigEvent::InputRegistered,
        IoConfigEvent::InputOpened => WireIoConfigEvent::InputOpened,
        IoConfigEvent::InputClosed => WireIoConfigEvent::InputClosed,
        IoConfigEvent::InputConfigChanged => WireIoConfigEvent::InputConfigChanged,
        IoConfigEvent::ClientStarted => WireIoConfigEvent::ClientStarted,
    })
}

// Mask instantiations. Each wire mask numbers its bits by enumerator
// index; each native mask carries the already-shifted flag values.

pub fn config_mask_from_wire(wire: i32) -> Result<ConfigMask> {
    translate_mask(
        wire as u32,
        config_flag_from_wire,
        |index| WireConfigFlag::from_index(index).ok_or(ConversionError::BadValue),
        ConfigFlag::bit,
    )
    .map(ConfigMask)
}

pub fn config_mask_to_wire(native: ConfigMask) -> Result<i32> {
    translate_mask(
        native.bits(),
        config_flag_to_wire,
        |bit| ConfigFlag::from_bit(1u32 << bit).ok_or(ConversionError::BadValue),
        |flag| 1u32 << flag.index(),
    )
    .map(|mask| mask as i32)
}

pub fn gain_mode_mask_from_wire(wire: i32) -> Result<GainModeMask> {
    translate_mask(
        wire as u32,
        gain_mode_from_wire,
        |index| WireGainMode::from_index(index).ok_or(ConversionError::BadValue),
        GainMode::bit,
    )
    .map(GainModeMask)
}

pub fn gain_mode_mask_to_wire(native: GainModeMask) -> Result<i32> {
    translate_mask(
        native.bits(),
        gain_mode_to_wire,
        |bit| GainMode::from_bit(1u32 << bit).ok_or(ConversionError::BadValue),
        |mode| 1u32 << mode.index(),
    )
    .map(|mask| mask as i32)
}

pub fn input_flags_mask_from_wire(wire: i32) -> Result<InputFlagsMask> {
    translate_mask(
        wire as u32,
        input_flag_from_wire,
        |index| WireInputFlag::from_index(index).ok_or(ConversionError::BadValue),
        InputFlag::bit,
    )
    .map(InputFlagsMask)
}

pub fn input_flags_mask_to_wire(native: InputFlagsMask) -> Result<i32> {
    translate_mask(
        native.bits(),
        input_flag_to_wire,
        |bit| InputFlag::from_bit(1u32 << bit).ok_or(ConversionError::BadValue),
        |flag| 1u32 << flag.index(),
    )
    .map(|mask| mask as i32)
}

pub fn output_flags_mask_from_wire(wire: i32) -> Result<OutputFlagsMask> {
    translate_mask(
        wire as u32,
        output_flag_from_wire,
        |index| WireOutputFlag::from_index(index).ok_or(ConversionError::BadValue),
        OutputFlag::bit,
    )
    .map(OutputFlagsMask)
}

pub fn output_flags_mask_to_wire(native: OutputFlagsMask) -> Result<i32> {
    translate_mask(
        native.bits(),
        output_flag_to_wire,
        |bit| OutputFlag::from_bit(1u32 << bit).ok_or(ConversionError::BadValue),
        |flag| 1u32 << flag.index(),
    )
    .map(|mask| mask as i32)
}

pub fn attribute_flags_mask_from_wire(wire: i32) -> Result<AttributeFlagsMask> {
    translate_mask(
        wire as u32,
        attribute_flag_from_wire,
        |index| WireAttributeFlag::from_index(index).ok_or(ConversionError::BadValue),
        AttributeFlag::bit,
    )
    .map(AttributeFlagsMask)
}

pub fn attribute_flags_mask_to_wire(native: AttributeFlagsMask) -> Result<i32> {
    translate_mask(
        native.bits(),
        attribute_flag_to_wire,
        |bit| AttributeFlag::from_bit(1u32 << bit).ok_or(ConversionError::BadValue),
        |flag| 1u32 << flag.index(),
    )
    .map(|mask| mask as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_reinterpret_round_trip() {
        // Uids above i32::MAX arrive as negative wire values.
        let uid = uid_from_wire(-2).unwrap();
        assert_eq!(uid.0, u32::MAX - 1);
        assert_eq!(uid_to_wire(uid).unwrap(), -2);
    }

    #[test]
    fn test_config_mask_translation() {
        // SAMPLE_RATE (index 0) and FORMAT (index 2) set on the wire.
        let mask = config_mask_from_wire(0b101).unwrap();
        assert!(mask.contains(ConfigFlag::SampleRate));
        assert!(!mask.contains(ConfigFlag::ChannelMask));
        assert!(mask.contains(ConfigFlag::Format));
        assert_eq!(config_mask_to_wire(mask).unwrap(), 0b101);
    }

    #[test]
    fn test_config_mask_unknown_bit_fails() {
        assert_eq!(
            config_mask_from_wire(1 << 5),
            Err(ConversionError::BadValue)
        );
        assert_eq!(
            config_mask_to_wire(ConfigMask(1 << 5)),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn test_output_flags_cross_the_reserved_gap() {
        // DIRECT_PCM sits at index 11 on the wire but bit 13 natively.
        let mask =
            output_flags_mask_from_wire(1 << WireOutputFlag::DirectPcm.index()).unwrap();
        assert_eq!(mask.bits(), OutputFlag::DirectPcm.bit());
        assert_eq!(
            output_flags_mask_to_wire(mask).unwrap(),
            1 << WireOutputFlag::DirectPcm.index()
        );
    }

    #[test]
    fn test_output_flags_reserved_bits_fail() {
        assert_eq!(
            output_flags_mask_to_wire(OutputFlagsMask(1 << 11)),
            Err(ConversionError::BadValue)
        );
        assert_eq!(
            output_flags_mask_to_wire(OutputFlagsMask(1 << 12)),
            Err(ConversionError::BadValue)
        );
    }

    #[test]
    fn test_gain_mode_mask_translation() {
        // JOINT is index 0 on the wire and bit 0x1 natively; RAMP is
        // index 2 and bit 0x4.
        let mask = gain_mode_mask_from_wire(0b101).unwrap();
        assert!(mask.contains(GainMode::Joint));
        assert!(mask.contains(GainMode::Ramp));
        assert!(!mask.contains(GainMode::Channels));
        assert_eq!(gain_mode_mask_to_wire(mask).unwrap(), 0b101);
    }

    #[test]
    fn test_attribute_flags_round_trip() {
        let wire = (1 << WireAttributeFlag::Secure.index())
            | (1 << WireAttributeFlag::CapturePrivate.index());
        let mask = attribute_flags_mask_from_wire(wire).unwrap();
        assert!(mask.contains(AttributeFlag::Secure));
        assert!(mask.contains(AttributeFlag::CapturePrivate));
        assert_eq!(attribute_flags_mask_to_wire(mask).unwrap(), wire);
    }

    #[test]
    fn test_empty_masks_translate_to_empty() {
        assert_eq!(input_flags_mask_from_wire(0).unwrap().bits(), 0);
        assert_eq!(output_flags_mask_to_wire(OutputFlagsMask(0)).unwrap(), 0);
        assert_eq!(attribute_flags_mask_from_wire(0).unwrap().bits(), 0);
    }
}
