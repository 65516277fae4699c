//! Shared-memory region mapping
//!
//! The wire protocol hands regions around as plain descriptors (a file
//! descriptor plus offset and size); the native side works with a live
//! mapping. The pair of conversions between the two is the one
//! collaborator of the conversion core that owns an operating-system
//! resource: a [`MappedRegion`] holds its own duplicate of the file
//! descriptor and unmaps on drop.

use std::io;
use std::os::unix::io::RawFd;
use std::ptr;

use passerelle_core::convert::{self, ConversionError};
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, ShmError>;

/// Errors that can occur while mapping or exporting a region
#[derive(Debug, Error)]
pub enum ShmError {
    /// The descriptor fields cannot name a mappable region
    #[error("invalid region descriptor: {0}")]
    InvalidDescriptor(String),

    /// The kernel refused the mapping
    #[error("mapping failed: {0}")]
    MapFailed(io::Error),

    /// The region's descriptor could not be duplicated for export
    #[error("descriptor export failed: {0}")]
    ExportFailed(io::Error),
}

/// Wire-facing description of a shared-memory region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDescriptor {
    pub fd: RawFd,
    pub offset: i64,
    pub size: i64,
}

/// A live mapping of a shared-memory region
///
/// Owns a duplicate of the descriptor's file descriptor; both the mapping
/// and the duplicate are released on drop.
pub struct MappedRegion {
    ptr: *mut u8,
    len: usize,
    fd: RawFd,
    offset: i64,
}

// SAFETY: the mapping stays valid for the lifetime of the value and the
// usual borrow rules guard in-process aliasing; cross-process access is
// the region protocol's concern, as with any shared mapping.
unsafe impl Send for MappedRegion {}
unsafe impl Sync for MappedRegion {}

impl MappedRegion {
    /// Map the region a descriptor names
    ///
    /// The descriptor must carry a valid file descriptor, a positive
    /// size, and a page-aligned, non-negative offset.
    pub fn map(desc: &RegionDescriptor) -> Result<Self> {
        if desc.fd < 0 {
            return Err(ShmError::InvalidDescriptor(format!(
                "negative file descriptor {}",
                desc.fd
            )));
        }
        if desc.size <= 0 {
            return Err(ShmError::InvalidDescriptor(format!(
                "non-positive size {}",
                desc.size
            )));
        }
        // SAFETY: sysconf has no memory-safety preconditions.
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as i64;
        if desc.offset < 0 || (page_size > 0 && desc.offset % page_size != 0) {
            return Err(ShmError::InvalidDescriptor(format!(
                "offset {} is not page aligned",
                desc.offset
            )));
        }

        // SAFETY: dup is safe to call with any integer; failures are
        // reported through the return value checked below.
        let fd = unsafe { libc::dup(desc.fd) };
        if fd < 0 {
            return Err(ShmError::InvalidDescriptor(format!(
                "cannot duplicate file descriptor {}: {}",
                desc.fd,
                io::Error::last_os_error()
            )));
        }

        let len = desc.size as usize;
        // SAFETY:
        // - A null address lets the kernel pick the placement
        // - fd is the valid duplicate obtained above and stays open past
        //   the call; MAP_SHARED keeps the mapping tied to the file
        // - mmap reports failure as MAP_FAILED, checked below
        let addr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd,
                desc.offset as libc::off_t,
            )
        };
        if addr == libc::MAP_FAILED {
            let err = io::Error::last_os_error();
            // SAFETY: fd is the still-open duplicate created above; the
            // error path will not reuse it.
            unsafe { libc::close(fd) };
            return Err(ShmError::MapFailed(err));
        }

        Ok(Self {
            ptr: addr as *mut u8,
            len,
            fd,
            offset: desc.offset,
        })
    }

    /// Export a descriptor naming this region
    ///
    /// The returned descriptor carries a fresh duplicate of the file
    /// descriptor; the caller owns it.
    pub fn descriptor(&self) -> Result<RegionDescriptor> {
        // SAFETY: self.fd is the owned duplicate held since map().
        let fd = unsafe { libc::dup(self.fd) };
        if fd < 0 {
            return Err(ShmError::ExportFailed(io::Error::last_os_error()));
        }
        Ok(RegionDescriptor {
            fd,
            offset: self.offset,
            size: self.len as i64,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr..ptr+len is the live mapping established in map().
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as as_slice, and &mut self rules out in-process aliases.
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
    }
}

impl Drop for MappedRegion {
    fn drop(&mut self) {
        // SAFETY: ptr/len describe the mapping created in map() and fd is
        // the duplicate owned by this value; neither is used again.
        unsafe {
            libc::munmap(self.ptr as *mut libc::c_void, self.len);
            libc::close(self.fd);
        }
    }
}

/// Convert a wire region descriptor into a live mapping
///
/// This is the opaque collaborator contract the conversion core consumes:
/// the region either maps in full, or the whole conversion fails as a bad
/// value. Diagnosis goes to the log, not the result.
pub fn region_from_wire(wire: &RegionDescriptor) -> convert::Result<MappedRegion> {
    MappedRegion::map(wire).map_err(|err| {
        debug!(%err, "shared region refused to map");
        ConversionError::BadValue
    })
}

/// Convert a live mapping back into a wire region descriptor
pub fn region_to_wire(native: &MappedRegion) -> convert::Result<RegionDescriptor> {
    native.descriptor().map_err(|err| {
        debug!(%err, "shared region refused to export");
        ConversionError::BadValue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};
    use std::os::unix::io::AsRawFd;

    fn region_file(contents: &[u8], size: i64) -> std::fs::File {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.set_len(size as u64).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        file
    }

    #[test]
    fn test_map_reads_region_contents() {
        let file = region_file(b"bonjour!", 4096);
        let desc = RegionDescriptor {
            fd: file.as_raw_fd(),
            offset: 0,
            size: 8,
        };
        let region = region_from_wire(&desc).unwrap();
        assert_eq!(region.len(), 8);
        assert_eq!(region.as_slice(), b"bonjour!");
    }

    #[test]
    fn test_descriptor_round_trip() {
        let file = region_file(b"12345678", 4096);
        let desc = RegionDescriptor {
            fd: file.as_raw_fd(),
            offset: 0,
            size: 8,
        };
        let region = region_from_wire(&desc).unwrap();
        let exported = region_to_wire(&region).unwrap();
        assert_eq!(exported.size, 8);
        assert_eq!(exported.offset, 0);
        // The export carries its own duplicate, not the caller's fd.
        assert_ne!(exported.fd, desc.fd);

        let again = region_from_wire(&exported).unwrap();
        assert_eq!(again.as_slice(), region.as_slice());
        // SAFETY: exported.fd is the duplicate we own per the descriptor()
        // contract, closed exactly once here.
        unsafe { libc::close(exported.fd) };
    }

    #[test]
    fn test_writes_reach_other_mappings() {
        let file = region_file(&[0u8; 8], 4096);
        let desc = RegionDescriptor {
            fd: file.as_raw_fd(),
            offset: 0,
            size: 8,
        };
        let mut writer = region_from_wire(&desc).unwrap();
        writer.as_mut_slice().copy_from_slice(b"abcdefgh");

        let reader = region_from_wire(&desc).unwrap();
        assert_eq!(reader.as_slice(), b"abcdefgh");
    }

    #[test]
    fn test_invalid_descriptors_fail() {
        let bad_fd = RegionDescriptor {
            fd: -1,
            offset: 0,
            size: 8,
        };
        assert_eq!(
            region_from_wire(&bad_fd).err(),
            Some(ConversionError::BadValue)
        );

        let file = region_file(b"", 4096);
        let empty = RegionDescriptor {
            fd: file.as_raw_fd(),
            offset: 0,
            size: 0,
        };
        assert_eq!(
            region_from_wire(&empty).err(),
            Some(ConversionError::BadValue)
        );

        let misaligned = RegionDescriptor {
            fd: file.as_raw_fd(),
            offset: 3,
            size: 8,
        };
        assert_eq!(
            region_from_wire(&misaligned).err(),
            Some(ConversionError::BadValue)
        );

        let negative_offset = RegionDescriptor {
            fd: file.as_raw_fd(),
            offset: -4096,
            size: 8,
        };
        assert_eq!(
            region_from_wire(&negative_offset).err(),
            Some(ConversionError::BadValue)
        );
    }
}
