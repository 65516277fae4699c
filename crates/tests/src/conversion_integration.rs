//! Integration tests for the conversion engine
//!
//! These tests drive whole objects through both conversion directions the
//! way the IPC boundary would: fully populated patches with every kind of
//! port, descriptors embedding them, and the intentionally lossy offload
//! version gating.

use passerelle_core::convert;
use passerelle_core::domain::native::{
    EncapsulationMode, OffloadSync, OFFLOAD_VERSION_0_1, OFFLOAD_VERSION_0_2,
};
use passerelle_core::domain::wire::{
    WireAttributeFlag, WireAttributes, WireClientDescriptor, WireConfig, WireConfigBase,
    WireConfigFlag, WireContentType, WireEncapsulationMode, WireGainConfig, WireGainMode,
    WireIoDescriptor, WireIoFlags, WireInputFlag, WireMixUseCase, WireOffloadInfo, WireOutputFlag,
    WirePatch, WirePortConfig, WirePortDeviceExt, WirePortExt, WirePortMixExt,
    WirePortSessionExt, WirePortRole, WirePortType, WireSourceType, WireStreamType, WireUsage,
};

fn mask_of(flags: &[WireConfigFlag]) -> i32 {
    flags.iter().fold(0, |acc, flag| acc | (1 << flag.index()))
}

/// A capture device feeding the system, fully populated
fn device_source_port(id: i32) -> WirePortConfig {
    WirePortConfig {
        id,
        role: WirePortRole::Source,
        port_type: WirePortType::Device,
        config_mask: mask_of(&[
            WireConfigFlag::SampleRate,
            WireConfigFlag::ChannelMask,
            WireConfigFlag::Format,
            WireConfigFlag::Gain,
            WireConfigFlag::Flags,
        ]),
        sample_rate: 48000,
        channel_mask: 0b11,
        format: 0x1,
        gain: WireGainConfig {
            index: 0,
            mode: 1 << WireGainMode::Joint.index(),
            channel_mask: 0b11,
            values: vec![-600],
            ramp_duration_ms: 20,
        },
        flags: WireIoFlags::Input(
            (1 << WireInputFlag::Fast.index()) | (1 << WireInputFlag::Raw.index()),
        ),
        ext: WirePortExt::Device(WirePortDeviceExt {
            hw_module: 1,
            device_type: 0x4,
            address: "card=1;device=0".to_string(),
        }),
    }
}

/// A playback mix sourcing data out of the system
fn mix_source_port(id: i32) -> WirePortConfig {
    WirePortConfig {
        id,
        role: WirePortRole::Source,
        port_type: WirePortType::Mix,
        config_mask: mask_of(&[
            WireConfigFlag::SampleRate,
            WireConfigFlag::ChannelMask,
            WireConfigFlag::Gain,
            WireConfigFlag::Flags,
        ]),
        sample_rate: 44100,
        channel_mask: 0b11,
        format: 0,
        gain: WireGainConfig {
            index: 1,
            mode: 1 << WireGainMode::Channels.index(),
            channel_mask: 0b11,
            values: vec![-150, -450],
            ramp_duration_ms: 0,
        },
        // DIRECT_PCM crosses the reserved gap in the native numbering.
        flags: WireIoFlags::Output(
            (1 << WireOutputFlag::Primary.index()) | (1 << WireOutputFlag::DirectPcm.index()),
        ),
        ext: WirePortExt::Mix(WirePortMixExt {
            hw_module: 1,
            handle: 13,
            usecase: WireMixUseCase::Stream(WireStreamType::Music),
        }),
    }
}

/// A capture mix sinking data into the system
fn mix_sink_port(id: i32) -> WirePortConfig {
    WirePortConfig {
        id,
        role: WirePortRole::Sink,
        port_type: WirePortType::Mix,
        config_mask: mask_of(&[WireConfigFlag::Format, WireConfigFlag::Flags]),
        format: 0x2,
        flags: WireIoFlags::Input(1 << WireInputFlag::HwHotword.index()),
        ext: WirePortExt::Mix(WirePortMixExt {
            hw_module: 1,
            handle: 14,
            usecase: WireMixUseCase::Source(WireSourceType::Hotword),
        }),
        ..Default::default()
    }
}

/// A session port; no direction resolves for it, so no gated field that
/// needs one is set
fn session_port(id: i32) -> WirePortConfig {
    WirePortConfig {
        id,
        role: WirePortRole::None,
        port_type: WirePortType::Session,
        config_mask: mask_of(&[WireConfigFlag::SampleRate]),
        sample_rate: 8000,
        ext: WirePortExt::Session(WirePortSessionExt { session: 21 }),
        ..Default::default()
    }
}

fn full_patch() -> WirePatch {
    WirePatch {
        id: 5,
        sinks: vec![mix_sink_port(30), session_port(31)],
        sources: vec![device_source_port(32), mix_source_port(33)],
    }
}

// ============================================================================
// WHOLE-OBJECT ROUND TRIPS
// ============================================================================

#[test]
fn test_full_patch_round_trip() {
    let wire = full_patch();
    let native = convert::patch_from_wire(&wire).unwrap();

    assert_eq!(native.sinks.len(), 2);
    assert_eq!(native.sources.len(), 2);

    let back = convert::patch_to_wire(&native).unwrap();
    assert_eq!(back, wire);
}

#[test]
fn test_io_descriptor_round_trip() {
    let wire = WireIoDescriptor {
        io_handle: 40,
        patch: full_patch(),
        sampling_rate: 48000,
        format: 0x1,
        channel_mask: 0b11,
        frame_count: 4096,
        frame_count_hal: 8192,
        latency_ms: 20,
        port_id: 32,
    };
    let native = convert::io_descriptor_from_wire(&wire).unwrap();
    assert_eq!(native.frame_count, 4096);

    let back = convert::io_descriptor_to_wire(&native).unwrap();
    assert_eq!(back, wire);
}

#[test]
fn test_client_descriptor_round_trip() {
    let wire = WireClientDescriptor {
        // A uid above i32::MAX arrives as a negative wire value.
        uid: -2,
        pid: 4321,
        tid: 4322,
        package_name: "com.example.player".to_string(),
    };
    let native = convert::client_descriptor_from_wire(&wire).unwrap();
    assert_eq!(native.uid.0, u32::MAX - 1);

    let back = convert::client_descriptor_to_wire(&native).unwrap();
    assert_eq!(back, wire);
}

#[test]
fn test_attributes_round_trip() {
    let wire = WireAttributes {
        content_type: WireContentType::Music,
        usage: WireUsage::Media,
        source: WireSourceType::Invalid,
        flags: (1 << WireAttributeFlag::Secure.index())
            | (1 << WireAttributeFlag::LowLatency.index()),
        tags: "context=media;priority=high".to_string(),
    };
    let native = convert::attributes_from_wire(&wire).unwrap();
    let back = convert::attributes_to_wire(&native).unwrap();
    assert_eq!(back, wire);
}

// ============================================================================
// FAIL-FAST BEHAVIOR
// ============================================================================

#[test]
fn test_one_bad_port_fails_the_whole_patch() {
    let mut wire = full_patch();
    // Three gain values for a stereo mask can never be valid.
    wire.sources[1].gain.values.push(0);
    assert!(convert::patch_from_wire(&wire).is_err());
}

#[test]
fn test_stale_union_payload_fails_the_whole_patch() {
    let mut wire = full_patch();
    // A mix extension under a device type is a discriminant mismatch.
    wire.sources[0].ext = WirePortExt::Mix(WirePortMixExt {
        hw_module: 1,
        handle: 99,
        usecase: WireMixUseCase::Empty,
    });
    assert!(convert::patch_from_wire(&wire).is_err());
}

// ============================================================================
// OFFLOAD VERSION GATING
// ============================================================================

#[test]
fn test_config_round_trip_at_current_revision() {
    let wire = WireConfig {
        sample_rate: 48000,
        channel_mask: 0b11,
        format: 0x1,
        offload_info: WireOffloadInfo {
            version: OFFLOAD_VERSION_0_2 as i32,
            config: WireConfigBase {
                sample_rate: 48000,
                channel_mask: 0b11,
                format: 0x1,
            },
            stream_type: WireStreamType::Music,
            bit_rate: 320_000,
            duration_us: 180_000_000,
            has_video: false,
            is_streaming: true,
            bit_width: 16,
            offload_buffer_size: 32_768,
            usage: WireUsage::Media,
            encapsulation_mode: WireEncapsulationMode::ElementaryStream,
            content_id: 7,
            sync_id: 8,
        },
        frame_count: 4096,
    };
    let native = convert::config_from_wire(&wire).unwrap();
    let back = convert::config_to_wire(&native).unwrap();
    assert_eq!(back, wire);
}

#[test]
fn test_old_offload_revision_truncates_to_defaults() {
    let wire = WireOffloadInfo {
        version: OFFLOAD_VERSION_0_1 as i32,
        encapsulation_mode: WireEncapsulationMode::Handle,
        content_id: 7,
        sync_id: 8,
        ..Default::default()
    };
    // The native value holds the full field set either way...
    let native = convert::offload_info_from_wire(&wire).unwrap();
    assert_eq!(
        native.sync,
        Some(OffloadSync {
            encapsulation_mode: EncapsulationMode::Handle,
            content_id: 7,
            sync_id: 8,
        })
    );
    // ...but reporting it back only reads what revision 0.1 guarantees.
    let back = convert::offload_info_to_wire(&native).unwrap();
    assert_eq!(back.encapsulation_mode, WireEncapsulationMode::None);
    assert_eq!(back.content_id, 0);
    assert_eq!(back.sync_id, 0);
}

// ============================================================================
// SERIALIZED WIRE SURFACE
// ============================================================================

#[test]
fn test_json_wire_patch_parses_and_converts() {
    let json = r#"{
        "id": 1,
        "sinks": [{
            "id": 2,
            "role": "Sink",
            "port_type": "Device",
            "config_mask": 1,
            "sample_rate": 44100,
            "channel_mask": 0,
            "format": 0,
            "gain": {
                "index": 0, "mode": 0, "channel_mask": 0,
                "values": [], "ramp_duration_ms": 0
            },
            "flags": {"Input": 0},
            "ext": {"Device": {
                "hw_module": 0, "device_type": 2, "address": "speaker"
            }}
        }],
        "sources": []
    }"#;
    let wire: WirePatch = serde_json::from_str(json).unwrap();
    let native = convert::patch_from_wire(&wire).unwrap();
    assert_eq!(native.sinks[0].sample_rate, 44100);
    assert_eq!(convert::patch_to_wire(&native).unwrap(), wire);
}
