//! Conversions between the wire and native models
//!
//! This module provides:
//! - The conversion result type and the integral/reinterpret primitives
//! - The generic mask translator serving every numbering-convention pair
//! - Generic tagged-union accessors and the port direction resolver
//! - A `*_from_wire` / `*_to_wire` pair for every composite object
//!
//! Every conversion is a pure function of its input. A struct conversion
//! attempts its field conversions in the order the functions below spell
//! out and aborts on the first failure; no partial value is ever returned.

pub mod tables;

use crate::domain::native::*;
use crate::domain::wire::*;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during a conversion
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The value cannot be represented in the target form
    #[error("value cannot be represented in the target form")]
    BadValue,
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Range-checked integral conversion
///
/// Fails when `from` is outside the destination type's representable
/// range; the value is otherwise unchanged in meaning.
pub fn convert_integral<T, F>(from: F) -> Result<T>
where
    T: TryFrom<F>,
{
    T::try_from(from).map_err(|_| ConversionError::BadValue)
}

/// Same-width bit reinterpretation
///
/// Implemented only for integer pairs of equal width, so the width
/// precondition is a compile-time fact rather than a runtime check. Used
/// for opaque identity-carrying integers only: handles, pid/uid, and the
/// values deliberately crossed over without semantic translation.
pub trait Reinterpret<F>: Sized {
    fn reinterpret(from: F) -> Self;
}

impl Reinterpret<i32> for u32 {
    fn reinterpret(from: i32) -> Self {
        from as u32
    }
}

impl Reinterpret<u32> for i32 {
    fn reinterpret(from: u32) -> Self {
        from as i32
    }
}

impl Reinterpret<i32> for i32 {
    fn reinterpret(from: i32) -> Self {
        from
    }
}

impl Reinterpret<u32> for u32 {
    fn reinterpret(from: u32) -> Self {
        from
    }
}

pub fn convert_reinterpret<T, F>(from: F) -> Result<T>
where
    T: Reinterpret<F>,
{
    Ok(T::reinterpret(from))
}

/// Translate a bitmask from one numbering convention into another
///
/// The walk visits set bits of `src` from the lowest position upward. For
/// each set bit `i`, `src_bit_to_enum` recovers the source enumerator the
/// bit stands for (under an index-based convention the enumerator with
/// index `i`, under a flag-based one the enumerator valued `1 << i`),
/// `convert_enum` carries it across the boundary, and `dst_enum_to_mask`
/// yields its contribution to the destination mask (the shifted index, or
/// the flag value as-is). The walk itself is convention-free; the four
/// source/destination convention pairings differ only in the helpers
/// passed in.
///
/// Any bit whose enumerator is unknown on either side fails the whole
/// translation; unknown bits are never silently dropped. Arithmetic is
/// unsigned throughout.
pub fn translate_mask<SrcEnum, DstEnum>(
    src: u32,
    convert_enum: impl Fn(SrcEnum) -> Result<DstEnum>,
    src_bit_to_enum: impl Fn(u32) -> Result<SrcEnum>,
    dst_enum_to_mask: impl Fn(DstEnum) -> u32,
) -> Result<u32> {
    let mut dst = 0u32;
    let mut remaining = src;
    let mut bit = 0u32;
    while remaining != 0 {
        if remaining & 1 != 0 {
            let src_enum = src_bit_to_enum(bit)?;
            let dst_enum = convert_enum(src_enum)?;
            dst |= dst_enum_to_mask(dst_enum);
        }
        bit += 1;
        remaining >>= 1;
    }
    Ok(dst)
}

/// True when the index-based `mask` carries the bit for enumerator `index`
pub fn index_bit_set(mask: i32, index: u32) -> bool {
    (mask as u32) & (1u32 << index) != 0
}

/// Read a tagged union's payload through a variant projection
///
/// Fails when the union currently holds a different variant; a default is
/// never substituted.
pub fn union_get<'u, U, T: ?Sized>(
    union: &'u U,
    variant: fn(&'u U) -> Option<&'u T>,
) -> Result<&'u T> {
    variant(union).ok_or(ConversionError::BadValue)
}

/// Write a tagged union's payload through a variant constructor
///
/// Replaces the whole union value, switching discriminant and payload
/// together. The previous discriminant is not consulted.
pub fn union_set<U, T>(union: &mut U, variant: fn(T) -> U, value: T) {
    *union = variant(value);
}

/// Flow direction of a port, derived from its role and type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Resolve the flow direction implied by a native (role, type) pair
///
/// A device sourcing data feeds a capture path and a device sinking data
/// terminates a playback path; for a mix the relationship is reversed.
/// Every combination outside those four is a validation failure of the
/// surrounding object.
pub fn direction(role: PortRole, port_type: PortType) -> Result<Direction> {
    match (port_type, role) {
        (PortType::Device, PortRole::Source) => Ok(Direction::Input),
        (PortType::Device, PortRole::Sink) => Ok(Direction::Output),
        (PortType::Mix, PortRole::Source) => Ok(Direction::Output),
        (PortType::Mix, PortRole::Sink) => Ok(Direction::Input),
        _ => Err(ConversionError::BadValue),
    }
}

/// Resolve the flow direction implied by a wire (role, type) pair
pub fn direction_from_wire(role: WirePortRole, port_type: WirePortType) -> Result<Direction> {
    match (port_type, role) {
        (WirePortType::Device, WirePortRole::Source) => Ok(Direction::Input),
        (WirePortType::Device, WirePortRole::Sink) => Ok(Direction::Output),
        (WirePortType::Mix, WirePortRole::Source) => Ok(Direction::Output),
        (WirePortType::Mix, WirePortRole::Sink) => Ok(Direction::Input),
        _ => Err(ConversionError::BadValue),
    }
}

/// Copy a string into a fixed, NUL-terminated buffer
///
/// Fails when the UTF-8 byte length exceeds the buffer capacity minus the
/// reserved terminator byte. The rest of the buffer is zero-filled.
pub fn string_to_fixed(s: &str, buf: &mut [u8]) -> Result<()> {
    let bytes = s.as_bytes();
    if bytes.len() > buf.len().saturating_sub(1) {
        debug!(
            len = bytes.len(),
            capacity = buf.len(),
            "string does not fit fixed buffer"
        );
        return Err(ConversionError::BadValue);
    }
    buf[..bytes.len()].copy_from_slice(bytes);
    buf[bytes.len()..].fill(0);
    Ok(())
}

/// Read a NUL-terminated string out of a fixed buffer
///
/// Fails when no terminator is present within the buffer, or when the
/// bytes before it are not valid UTF-8.
pub fn string_from_fixed(buf: &[u8]) -> Result<String> {
    let len = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or(ConversionError::BadValue)?;
    std::str::from_utf8(&buf[..len])
        .map(str::to_owned)
        .map_err(|_| ConversionError::BadValue)
}

/// Convert a wire gain config, sized by the surrounding role and type
///
/// Field order: index, mode, channel mask, values, ramp duration. The
/// value count is 1 when the joint mode bit is set, otherwise the channel
/// count the resolved direction assigns to the channel mask; a wire value
/// sequence of any other length fails, as does a count beyond
/// [`GAIN_VALUES_MAX`].
pub fn gain_config_from_wire(
    wire: &WireGainConfig,
    role: WirePortRole,
    port_type: WirePortType,
) -> Result<GainConfig> {
    let index = convert_integral(wire.index)?;
    let mode = tables::gain_mode_mask_from_wire(wire.mode)?;
    let channel_mask = tables::channel_mask_from_wire(wire.channel_mask)?;

    let is_input = direction_from_wire(role, port_type)? == Direction::Input;
    let is_joint = index_bit_set(wire.mode, WireGainMode::Joint.index());
    let expected = if is_joint {
        1
    } else if is_input {
        channel_mask.input_channel_count()
    } else {
        channel_mask.output_channel_count()
    };
    if wire.values.len() != expected || expected > GAIN_VALUES_MAX {
        debug!(
            got = wire.values.len(),
            expected, "gain value count mismatch"
        );
        return Err(ConversionError::BadValue);
    }
    let mut values = Vec::with_capacity(expected);
    for value in &wire.values {
        values.push(convert_integral(*value)?);
    }

    Ok(GainConfig {
        index,
        mode,
        channel_mask,
        values,
        ramp_duration_ms: convert_integral(wire.ramp_duration_ms)?,
    })
}

/// Convert a native gain config, sized by the surrounding role and type
pub fn gain_config_to_wire(
    native: &GainConfig,
    role: PortRole,
    port_type: PortType,
) -> Result<WireGainConfig> {
    let is_input = direction(role, port_type)? == Direction::Input;
    let is_joint = native.mode.contains(GainMode::Joint);
    let expected = if is_joint {
        1
    } else if is_input {
        native.channel_mask.input_channel_count()
    } else {
        native.channel_mask.output_channel_count()
    };
    if native.values.len() != expected || expected > GAIN_VALUES_MAX {
        debug!(
            got = native.values.len(),
            expected, "gain value count mismatch"
        );
        return Err(ConversionError::BadValue);
    }
    let mut values = Vec::with_capacity(expected);
    for value in &native.values {
        values.push(convert_integral(*value)?);
    }

    Ok(WireGainConfig {
        index: convert_integral(native.index)?,
        mode: tables::gain_mode_mask_to_wire(native.mode)?,
        channel_mask: tables::channel_mask_to_wire(native.channel_mask)?,
        values,
        ramp_duration_ms: convert_integral(native.ramp_duration_ms)?,
    })
}

/// Convert wire I/O flags; the active branch is implied by (role, type)
pub fn io_flags_from_wire(
    wire: &WireIoFlags,
    role: WirePortRole,
    port_type: WirePortType,
) -> Result<IoFlags> {
    match direction_from_wire(role, port_type)? {
        Direction::Input => {
            let mask = *union_get(wire, WireIoFlags::as_input)?;
            Ok(IoFlags::Input(tables::input_flags_mask_from_wire(mask)?))
        }
        Direction::Output => {
            let mask = *union_get(wire, WireIoFlags::as_output)?;
            Ok(IoFlags::Output(tables::output_flags_mask_from_wire(mask)?))
        }
    }
}

/// Convert native I/O flags; the active branch is implied by (role, type)
pub fn io_flags_to_wire(
    native: &IoFlags,
    role: PortRole,
    port_type: PortType,
) -> Result<WireIoFlags> {
    let mut wire = WireIoFlags::default();
    match direction(role, port_type)? {
        Direction::Input => {
            let mask = *union_get(native, IoFlags::as_input)?;
            union_set(
                &mut wire,
                WireIoFlags::Input,
                tables::input_flags_mask_to_wire(mask)?,
            );
        }
        Direction::Output => {
            let mask = *union_get(native, IoFlags::as_output)?;
            union_set(
                &mut wire,
                WireIoFlags::Output,
                tables::output_flags_mask_to_wire(mask)?,
            );
        }
    }
    Ok(wire)
}

pub fn port_device_ext_from_wire(wire: &WirePortDeviceExt) -> Result<PortConfigDeviceExt> {
    let mut native = PortConfigDeviceExt {
        hw_module: tables::module_handle_from_wire(wire.hw_module)?,
        device_type: tables::device_type_from_wire(wire.device_type)?,
        address: [0; DEVICE_ADDRESS_MAX],
    };
    string_to_fixed(&wire.address, &mut native.address)?;
    Ok(native)
}

pub fn port_device_ext_to_wire(native: &PortConfigDeviceExt) -> Result<WirePortDeviceExt> {
    Ok(WirePortDeviceExt {
        hw_module: tables::module_handle_to_wire(native.hw_module)?,
        device_type: tables::device_type_to_wire(native.device_type)?,
        address: string_from_fixed(&native.address)?,
    })
}

/// Convert a wire mix use case; the active branch is implied by the role
pub fn mix_usecase_from_wire(wire: &WireMixUseCase, role: WirePortRole) -> Result<MixUseCase> {
    match role {
        WirePortRole::None => {
            // No role still requires the explicit empty marker.
            union_get(wire, WireMixUseCase::as_empty)?;
            Ok(MixUseCase::None)
        }
        WirePortRole::Source => {
            // A mix sourcing a playback path carries a stream type.
            let stream = union_get(wire, WireMixUseCase::as_stream)?;
            Ok(MixUseCase::Stream(tables::stream_type_from_wire(*stream)?))
        }
        WirePortRole::Sink => {
            // A mix sinking a capture path carries a source type.
            let source = union_get(wire, WireMixUseCase::as_source)?;
            Ok(MixUseCase::Source(tables::source_type_from_wire(*source)?))
        }
    }
}

/// Convert a native mix use case; the active branch is implied by the role
pub fn mix_usecase_to_wire(native: &MixUseCase, role: PortRole) -> Result<WireMixUseCase> {
    let mut wire = WireMixUseCase::default();
    match role {
        PortRole::None => {
            union_get(native, MixUseCase::as_empty)?;
        }
        PortRole::Source => {
            // A mix sourcing a playback path carries a stream type.
            let stream = union_get(native, MixUseCase::as_stream)?;
            union_set(
                &mut wire,
                WireMixUseCase::Stream,
                tables::stream_type_to_wire(*stream)?,
            );
        }
        PortRole::Sink => {
            // A mix sinking a capture path carries a source type.
            let source = union_get(native, MixUseCase::as_source)?;
            union_set(
                &mut wire,
                WireMixUseCase::Source,
                tables::source_type_to_wire(*source)?,
            );
        }
    }
    Ok(wire)
}

pub fn port_mix_ext_from_wire(wire: &WirePortMixExt, role: WirePortRole) -> Result<PortConfigMixExt> {
    Ok(PortConfigMixExt {
        hw_module: tables::module_handle_from_wire(wire.hw_module)?,
        handle: tables::io_handle_from_wire(wire.handle)?,
        usecase: mix_usecase_from_wire(&wire.usecase, role)?,
    })
}

pub fn port_mix_ext_to_wire(native: &PortConfigMixExt, role: PortRole) -> Result<WirePortMixExt> {
    Ok(WirePortMixExt {
        hw_module: tables::module_handle_to_wire(native.hw_module)?,
        handle: tables::io_handle_to_wire(native.handle)?,
        usecase: mix_usecase_to_wire(&native.usecase, role)?,
    })
}

pub fn port_session_ext_from_wire(wire: &WirePortSessionExt) -> Result<PortConfigSessionExt> {
    Ok(PortConfigSessionExt {
        session: tables::session_id_from_wire(wire.session)?,
    })
}

pub fn port_session_ext_to_wire(native: &PortConfigSessionExt) -> Result<WirePortSessionExt> {
    Ok(WirePortSessionExt {
        session: tables::session_id_to_wire(native.session)?,
    })
}

/// Convert a wire port extension; the active branch is implied by the type
pub fn port_ext_from_wire(
    wire: &WirePortExt,
    port_type: WirePortType,
    role: WirePortRole,
) -> Result<PortConfigExt> {
    match port_type {
        WirePortType::None => {
            // No extension still requires the explicit empty marker.
            union_get(wire, WirePortExt::as_empty)?;
            Ok(PortConfigExt::None)
        }
        WirePortType::Device => {
            let device = union_get(wire, WirePortExt::as_device)?;
            Ok(PortConfigExt::Device(port_device_ext_from_wire(device)?))
        }
        WirePortType::Mix => {
            let mix = union_get(wire, WirePortExt::as_mix)?;
            Ok(PortConfigExt::Mix(port_mix_ext_from_wire(mix, role)?))
        }
        WirePortType::Session => {
            let session = union_get(wire, WirePortExt::as_session)?;
            Ok(PortConfigExt::Session(port_session_ext_from_wire(session)?))
        }
    }
}

/// Convert a native port extension; the active branch is implied by the type
pub fn port_ext_to_wire(
    native: &PortConfigExt,
    port_type: PortType,
    role: PortRole,
) -> Result<WirePortExt> {
    let mut wire = WirePortExt::default();
    match port_type {
        PortType::None => {
            // The type says there is no extension; the union must agree.
            union_get(native, PortConfigExt::as_empty)?;
        }
        PortType::Device => {
            let device = union_get(native, PortConfigExt::as_device)?;
            union_set(&mut wire, WirePortExt::Device, port_device_ext_to_wire(device)?);
        }
        PortType::Mix => {
            let mix = union_get(native, PortConfigExt::as_mix)?;
            union_set(&mut wire, WirePortExt::Mix, port_mix_ext_to_wire(mix, role)?);
        }
        PortType::Session => {
            let session = union_get(native, PortConfigExt::as_session)?;
            union_set(
                &mut wire,
                WirePortExt::Session,
                port_session_ext_to_wire(session)?,
            );
        }
    }
    Ok(wire)
}

/// Convert a wire port config
///
/// Field order: id, role, type, config mask, then the mask-gated fields
/// (sample rate, channel mask, format, gain, flags) and finally the
/// extension. Gated fields whose bit is clear are neither read nor
/// written.
pub fn port_config_from_wire(wire: &WirePortConfig) -> Result<PortConfig> {
    let mut native = PortConfig {
        id: tables::port_handle_from_wire(wire.id)?,
        role: tables::port_role_from_wire(wire.role)?,
        port_type: tables::port_type_from_wire(wire.port_type)?,
        config_mask: tables::config_mask_from_wire(wire.config_mask)?,
        ..Default::default()
    };
    if index_bit_set(wire.config_mask, WireConfigFlag::SampleRate.index()) {
        native.sample_rate = convert_integral(wire.sample_rate)?;
    }
    if index_bit_set(wire.config_mask, WireConfigFlag::ChannelMask.index()) {
        native.channel_mask = tables::channel_mask_from_wire(wire.channel_mask)?;
    }
    if index_bit_set(wire.config_mask, WireConfigFlag::Format.index()) {
        native.format = tables::format_from_wire(wire.format)?;
    }
    if index_bit_set(wire.config_mask, WireConfigFlag::Gain.index()) {
        native.gain = gain_config_from_wire(&wire.gain, wire.role, wire.port_type)?;
    }
    if index_bit_set(wire.config_mask, WireConfigFlag::Flags.index()) {
        native.flags = io_flags_from_wire(&wire.flags, wire.role, wire.port_type)?;
    }
    native.ext = port_ext_from_wire(&wire.ext, wire.port_type, wire.role)?;
    Ok(native)
}

/// Convert a native port config
pub fn port_config_to_wire(native: &PortConfig) -> Result<WirePortConfig> {
    let mut wire = WirePortConfig {
        id: tables::port_handle_to_wire(native.id)?,
        role: tables::port_role_to_wire(native.role)?,
        port_type: tables::port_type_to_wire(native.port_type)?,
        config_mask: tables::config_mask_to_wire(native.config_mask)?,
        ..Default::default()
    };
    if native.config_mask.contains(ConfigFlag::SampleRate) {
        wire.sample_rate = convert_integral(native.sample_rate)?;
    }
    if native.config_mask.contains(ConfigFlag::ChannelMask) {
        wire.channel_mask = tables::channel_mask_to_wire(native.channel_mask)?;
    }
    if native.config_mask.contains(ConfigFlag::Format) {
        wire.format = tables::format_to_wire(native.format)?;
    }
    if native.config_mask.contains(ConfigFlag::Gain) {
        wire.gain = gain_config_to_wire(&native.gain, native.role, native.port_type)?;
    }
    if native.config_mask.contains(ConfigFlag::Flags) {
        wire.flags = io_flags_to_wire(&native.flags, native.role, native.port_type)?;
    }
    wire.ext = port_ext_to_wire(&native.ext, native.port_type, native.role)?;
    Ok(wire)
}

/// Convert a wire patch
///
/// Sinks convert before sources; each collection is bounded by
/// [`PATCH_PORTS_MAX`] before any element converts.
pub fn patch_from_wire(wire: &WirePatch) -> Result<Patch> {
    let id = tables::patch_handle_from_wire(wire.id)?;
    if wire.sinks.len() > PATCH_PORTS_MAX || wire.sources.len() > PATCH_PORTS_MAX {
        debug!(
            sinks = wire.sinks.len(),
            sources = wire.sources.len(),
            "patch exceeds port capacity"
        );
        return Err(ConversionError::BadValue);
    }
    let mut sinks = Vec::with_capacity(wire.sinks.len());
    for sink in &wire.sinks {
        sinks.push(port_config_from_wire(sink)?);
    }
    let mut sources = Vec::with_capacity(wire.sources.len());
    for source in &wire.sources {
        sources.push(port_config_from_wire(source)?);
    }
    Ok(Patch { id, sinks, sources })
}

/// Convert a native patch
pub fn patch_to_wire(native: &Patch) -> Result<WirePatch> {
    let id = tables::patch_handle_to_wire(native.id)?;
    if native.sinks.len() > PATCH_PORTS_MAX || native.sources.len() > PATCH_PORTS_MAX {
        debug!(
            sinks = native.sinks.len(),
            sources = native.sources.len(),
            "patch exceeds port capacity"
        );
        return Err(ConversionError::BadValue);
    }
    let mut sinks = Vec::with_capacity(native.sinks.len());
    for sink in &native.sinks {
        sinks.push(port_config_to_wire(sink)?);
    }
    let mut sources = Vec::with_capacity(native.sources.len());
    for source in &native.sources {
        sources.push(port_config_to_wire(source)?);
    }
    Ok(WirePatch { id, sinks, sources })
}

pub fn io_descriptor_from_wire(wire: &WireIoDescriptor) -> Result<IoDescriptor> {
    Ok(IoDescriptor {
        io_handle: tables::io_handle_from_wire(wire.io_handle)?,
        patch: patch_from_wire(&wire.patch)?,
        sampling_rate: convert_integral(wire.sampling_rate)?,
        format: tables::format_from_wire(wire.format)?,
        channel_mask: tables::channel_mask_from_wire(wire.channel_mask)?,
        frame_count: convert_integral(wire.frame_count)?,
        frame_count_hal: convert_integral(wire.frame_count_hal)?,
        latency_ms: convert_integral(wire.latency_ms)?,
        port_id: tables::port_handle_from_wire(wire.port_id)?,
    })
}

pub fn io_descriptor_to_wire(native: &IoDescriptor) -> Result<WireIoDescriptor> {
    Ok(WireIoDescriptor {
        io_handle: tables::io_handle_to_wire(native.io_handle)?,
        patch: patch_to_wire(&native.patch)?,
        sampling_rate: convert_integral(native.sampling_rate)?,
        format: tables::format_to_wire(native.format)?,
        channel_mask: tables::channel_mask_to_wire(native.channel_mask)?,
        frame_count: convert_integral(native.frame_count)?,
        frame_count_hal: convert_integral(native.frame_count_hal)?,
        latency_ms: convert_integral(native.latency_ms)?,
        port_id: tables::port_handle_to_wire(native.port_id)?,
    })
}

pub fn client_descriptor_from_wire(wire: &WireClientDescriptor) -> Result<ClientDescriptor> {
    Ok(ClientDescriptor {
        uid: tables::uid_from_wire(wire.uid)?,
        pid: tables::pid_from_wire(wire.pid)?,
        tid: tables::pid_from_wire(wire.tid)?,
        package_name: wire.package_name.clone(),
    })
}

pub fn client_descriptor_to_wire(native: &ClientDescriptor) -> Result<WireClientDescriptor> {
    Ok(WireClientDescriptor {
        uid: tables::uid_to_wire(native.uid)?,
        pid: tables::pid_to_wire(native.pid)?,
        tid: tables::pid_to_wire(native.tid)?,
        package_name: native.package_name.clone(),
    })
}

pub fn attributes_from_wire(wire: &WireAttributes) -> Result<Attributes> {
    let mut native = Attributes {
        content_type: tables::content_type_from_wire(wire.content_type)?,
        usage: tables::usage_from_wire(wire.usage)?,
        source: tables::source_type_from_wire(wire.source)?,
        flags: tables::attribute_flags_mask_from_wire(wire.flags)?,
        tags: [0; ATTRIBUTE_TAGS_MAX],
    };
    string_to_fixed(&wire.tags, &mut native.tags)?;
    Ok(native)
}

pub fn attributes_to_wire(native: &Attributes) -> Result<WireAttributes> {
    Ok(WireAttributes {
        content_type: tables::content_type_to_wire(native.content_type)?,
        usage: tables::usage_to_wire(native.usage)?,
        source: tables::source_type_to_wire(native.source)?,
        flags: tables::attribute_flags_mask_to_wire(native.flags)?,
        tags: string_from_fixed(&native.tags)?,
    })
}

/// Convert a wire offload info
///
/// The wire form always carries the full current field set, so the native
/// value is populated through the latest revision regardless of the
/// version it records.
pub fn offload_info_from_wire(wire: &WireOffloadInfo) -> Result<OffloadInfo> {
    let config = config_base_from_wire(&wire.config)?;
    Ok(OffloadInfo {
        version: convert_integral(wire.version)?,
        sample_rate: config.sample_rate,
        channel_mask: config.channel_mask,
        format: config.format,
        stream_type: tables::stream_type_from_wire(wire.stream_type)?,
        bit_rate: convert_integral(wire.bit_rate)?,
        duration_us: convert_integral(wire.duration_us)?,
        has_video: wire.has_video,
        is_streaming: wire.is_streaming,
        bit_width: convert_integral(wire.bit_width)?,
        offload_buffer_size: convert_integral(wire.offload_buffer_size)?,
        usage: tables::usage_from_wire(wire.usage)?,
        sync: Some(OffloadSync {
            encapsulation_mode: tables::encapsulation_mode_from_wire(wire.encapsulation_mode)?,
            content_id: convert_reinterpret(wire.content_id)?,
            sync_id: convert_reinterpret(wire.sync_id)?,
        }),
    })
}

/// Convert a native offload info
///
/// Only the fields the recorded version guarantees are read: a value at
/// revision 0.2 or later must carry its sync fields (their absence fails
/// the conversion), while an older value leaves the wire sync fields at
/// their defaults even when a stale tier is present.
pub fn offload_info_to_wire(native: &OffloadInfo) -> Result<WireOffloadInfo> {
    let mut wire = WireOffloadInfo {
        version: convert_integral(native.version)?,
        config: WireConfigBase {
            sample_rate: convert_integral(native.sample_rate)?,
            channel_mask: tables::channel_mask_to_wire(native.channel_mask)?,
            format: tables::format_to_wire(native.format)?,
        },
        stream_type: tables::stream_type_to_wire(native.stream_type)?,
        bit_rate: convert_integral(native.bit_rate)?,
        duration_us: convert_integral(native.duration_us)?,
        has_video: native.has_video,
        is_streaming: native.is_streaming,
        bit_width: convert_integral(native.bit_width)?,
        offload_buffer_size: convert_integral(native.offload_buffer_size)?,
        usage: tables::usage_to_wire(native.usage)?,
        ..Default::default()
    };
    if native.version >= OFFLOAD_VERSION_0_2 {
        let sync = native.sync.as_ref().ok_or_else(|| {
            debug!(version = native.version, "offload info is missing its sync fields");
            ConversionError::BadValue
        })?;
        wire.encapsulation_mode = tables::encapsulation_mode_to_wire(sync.encapsulation_mode)?;
        wire.content_id = convert_reinterpret(sync.content_id)?;
        wire.sync_id = convert_reinterpret(sync.sync_id)?;
    }
    Ok(wire)
}

pub fn config_from_wire(wire: &WireConfig) -> Result<Config> {
    Ok(Config {
        sample_rate: convert_integral(wire.sample_rate)?,
        channel_mask: tables::channel_mask_from_wire(wire.channel_mask)?,
        format: tables::format_from_wire(wire.format)?,
        offload_info: offload_info_from_wire(&wire.offload_info)?,
        frame_count: convert_integral(wire.frame_count)?,
    })
}

pub fn config_to_wire(native: &Config) -> Result<WireConfig> {
    Ok(WireConfig {
        sample_rate: convert_integral(native.sample_rate)?,
        channel_mask: tables::channel_mask_to_wire(native.channel_mask)?,
        format: tables::format_to_wire(native.format)?,
        offload_info: offload_info_to_wire(&native.offload_info)?,
        frame_count: convert_integral(native.frame_count)?,
    })
}

pub fn config_base_from_wire(wire: &WireConfigBase) -> Result<ConfigBase> {
    Ok(ConfigBase {
        sample_rate: convert_integral(wire.sample_rate)?,
        channel_mask: tables::channel_mask_from_wire(wire.channel_mask)?,
        format: tables::format_from_wire(wire.format)?,
    })
}

pub fn config_base_to_wire(native: &ConfigBase) -> Result<WireConfigBase> {
    Ok(WireConfigBase {
        sample_rate: convert_integral(native.sample_rate)?,
        channel_mask: tables::channel_mask_to_wire(native.channel_mask)?,
        format: tables::format_to_wire(native.format)?,
    })
}
