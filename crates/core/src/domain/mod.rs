//! Domain entities: the two parallel representations of the audio objects

pub mod native;
pub mod wire;

// Re-export specific items to avoid ambiguous glob imports
pub use native::{
    Attributes, ChannelMask, ClientDescriptor, Config, ConfigBase, ConfigMask, DeviceType, Format,
    GainConfig, GainModeMask, IoDescriptor, IoFlags, MixUseCase, OffloadInfo, OffloadSync, Patch,
    PortConfig, PortConfigExt, PortRole, PortType,
};
pub use wire::{
    WireAttributes, WireClientDescriptor, WireConfig, WireConfigBase, WireGainConfig,
    WireIoDescriptor, WireIoFlags, WireMixUseCase, WireOffloadInfo, WirePatch, WirePortConfig,
    WirePortExt, WirePortRole, WirePortType,
};
