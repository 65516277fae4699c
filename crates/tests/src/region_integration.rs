//! Integration tests spanning the conversion core and the shared-memory
//! collaborator: wire objects serialized into a mapped region and read
//! back out on the other side.

use std::io::Write;
use std::os::fd::{FromRawFd, OwnedFd};
use std::os::unix::io::AsRawFd;

use passerelle_core::convert;
use passerelle_core::domain::wire::{WirePatch, WirePortConfig, WirePortExt, WirePortRole};
use passerelle_infra::shm::{region_from_wire, region_to_wire, RegionDescriptor};

const REGION_SIZE: i64 = 4096;

fn backing_file() -> std::fs::File {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&[0u8; REGION_SIZE as usize]).unwrap();
    file
}

#[test]
fn test_wire_patch_travels_through_a_shared_region() {
    let wire = WirePatch {
        id: 9,
        sinks: vec![WirePortConfig {
            id: 1,
            role: WirePortRole::None,
            ext: WirePortExt::Empty,
            ..Default::default()
        }],
        sources: vec![],
    };
    let payload = serde_json::to_vec(&wire).unwrap();
    assert!(payload.len() <= REGION_SIZE as usize);

    let file = backing_file();
    let desc = RegionDescriptor {
        fd: file.as_raw_fd(),
        offset: 0,
        size: REGION_SIZE,
    };

    // Writer side: map the region and drop the payload into it.
    let mut writer = region_from_wire(&desc).unwrap();
    writer.as_mut_slice()[..payload.len()].copy_from_slice(&payload);
    drop(writer);

    // Reader side: a fresh mapping of the same descriptor sees the bytes.
    let reader = region_from_wire(&desc).unwrap();
    let parsed: WirePatch = serde_json::from_slice(&reader.as_slice()[..payload.len()]).unwrap();
    assert_eq!(parsed, wire);

    let native = convert::patch_from_wire(&parsed).unwrap();
    assert_eq!(convert::patch_to_wire(&native).unwrap(), wire);
}

#[test]
fn test_region_descriptor_export_names_the_same_region() {
    let file = backing_file();
    let desc = RegionDescriptor {
        fd: file.as_raw_fd(),
        offset: 0,
        size: REGION_SIZE,
    };

    let mut original = region_from_wire(&desc).unwrap();
    original.as_mut_slice()[..7].copy_from_slice(b"salut !");

    let exported = region_to_wire(&original).unwrap();
    assert_eq!(exported.size, REGION_SIZE);

    let reopened = region_from_wire(&exported).unwrap();
    assert_eq!(&reopened.as_slice()[..7], b"salut !");

    // The exported descriptor carries a duplicate this test owns.
    // SAFETY: the fd is ours per the export contract, wrapped exactly once.
    let _exported_fd = unsafe { OwnedFd::from_raw_fd(exported.fd) };
}
