use std::ffi::{CString, c_int, c_void};
use std::io;
use std::path::PathBuf;
use std::ptr::NonNull;

use crate::handle::{Handle, InvalidHandleError};
use crate::libwayland as ffi;

#[derive(Debug, thiserror::Error)]
pub enum ShmError {
    #[error("unsupported pixel format {format:#x}")]
    UnsupportedFormat { format: u32 },
    #[error("buffer dimensions {width}x{height} do not fit a wl_shm pool")]
    TooLarge { width: u32, height: u32 },
    #[error("could not create backing file in {}", .dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not size backing file to {size} bytes")]
    Truncate {
        size: usize,
        #[source]
        source: io::Error,
    },
    #[error("could not map {size} bytes of backing file")]
    Map {
        size: usize,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Bind(#[from] InvalidHandleError),
}

struct Fd(c_int);

impl Drop for Fd {
    fn drop(&mut self) {
        unsafe { libc::close(self.0) };
    }
}

#[derive(Debug)]
struct Mapping {
    data: NonNull<u8>,
    len: usize,
}

impl Drop for Mapping {
    fn drop(&mut self) {
        unsafe { libc::munmap(self.data.as_ptr() as *mut c_void, self.len) };
    }
}

/// Allocates file-backed pixel buffers for a bound `wl_shm` global. The
/// backing files live in `runtime_dir` (callers pass `XDG_RUNTIME_DIR` or a
/// stand-in, nothing here reads the environment) and are unlinked as soon as
/// they are open, so nothing is left behind on any exit path.
pub struct ShmAllocator {
    runtime_dir: PathBuf,
}

impl ShmAllocator {
    pub fn new(runtime_dir: impl Into<PathBuf>) -> Self {
        Self {
            runtime_dir: runtime_dir.into(),
        }
    }

    /// Creates a `width` x `height` buffer of the given `wl_shm` format
    /// (32-bit formats only) backed by an anonymous file shared with the
    /// server. The pool proxy is destroyed before returning; the returned
    /// buffer owns the `wl_buffer` and the client-side mapping.
    pub fn allocate<'lib>(
        &self,
        wl_shm: &Handle<'lib, ffi::wl_shm>,
        width: u32,
        height: u32,
        format: u32,
    ) -> Result<ShmBuffer<'lib>, ShmError> {
        if !matches!(
            format,
            ffi::WL_SHM_FORMAT_ARGB8888 | ffi::WL_SHM_FORMAT_XRGB8888
        ) {
            return Err(ShmError::UnsupportedFormat { format });
        }

        let stride = width
            .checked_mul(4)
            .filter(|stride| *stride <= i32::MAX as u32)
            .ok_or(ShmError::TooLarge { width, height })?;
        let size = (stride as u64)
            .checked_mul(height as u64)
            .filter(|size| *size > 0 && *size <= i32::MAX as u64)
            .ok_or(ShmError::TooLarge { width, height })? as usize;

        let fd = Fd(self.open_backing_file()?);

        if unsafe { libc::ftruncate(fd.0, size as libc::off_t) } < 0 {
            return Err(ShmError::Truncate {
                size,
                source: io::Error::last_os_error(),
            });
        }

        let data = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd.0,
                0,
            )
        };
        if data == libc::MAP_FAILED {
            return Err(ShmError::Map {
                size,
                source: io::Error::last_os_error(),
            });
        }
        let mapping = Mapping {
            // MAP_FAILED was checked, mmap never returns null otherwise.
            data: unsafe { NonNull::new_unchecked(data as *mut u8) },
            len: size,
        };

        let lib = wl_shm.lib();
        let pool =
            unsafe { ffi::wl_shm_create_pool(lib, wl_shm.as_ptr(), fd.0, size as i32) };
        let pool = Handle::<ffi::wl_shm_pool>::acquire(lib, pool)?;

        let wl_buffer = unsafe {
            ffi::wl_shm_pool_create_buffer(
                lib,
                pool.as_ptr(),
                0,
                width as i32,
                height as i32,
                stride as i32,
                format,
            )
        };
        let wl_buffer = Handle::<ffi::wl_buffer>::acquire(lib, wl_buffer)?;

        // the buffer keeps the pool's pages alive server-side; the pool proxy
        // and our fd are not needed past this point.
        drop(pool);
        drop(fd);

        log::debug!("allocated {width}x{height} shm buffer ({size} bytes)");
        Ok(ShmBuffer {
            wl_buffer,
            mapping,
            width,
            height,
            stride,
        })
    }

    fn open_backing_file(&self) -> Result<c_int, ShmError> {
        let path = self.runtime_dir.join("waybind-shm-XXXXXX");
        let create_err = |source| ShmError::Create {
            dir: self.runtime_dir.clone(),
            source,
        };
        let template = CString::new(path.into_os_string().into_encoded_bytes())
            .map_err(|_| create_err(io::Error::from(io::ErrorKind::InvalidInput)))?;

        let mut template = template.into_bytes_with_nul();
        let fd = unsafe {
            libc::mkostemp(template.as_mut_ptr() as *mut libc::c_char, libc::O_CLOEXEC)
        };
        if fd < 0 {
            return Err(create_err(io::Error::last_os_error()));
        }
        // the fd is the only reference we need.
        unsafe { libc::unlink(template.as_ptr() as *const libc::c_char) };
        Ok(fd)
    }
}

/// One shared-memory pixel buffer: the `wl_buffer` proxy plus the writable
/// client-side mapping of the same pages the server reads.
#[derive(Debug)]
pub struct ShmBuffer<'lib> {
    wl_buffer: Handle<'lib, ffi::wl_buffer>,
    mapping: Mapping,
    width: u32,
    height: u32,
    stride: u32,
}

impl<'lib> ShmBuffer<'lib> {
    pub fn wl_buffer(&self) -> &Handle<'lib, ffi::wl_buffer> {
        &self.wl_buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Whole mapping as 32-bit pixels, row-major, `stride == width * 4`.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        unsafe {
            std::slice::from_raw_parts_mut(
                self.mapping.data.as_ptr() as *mut u32,
                self.mapping.len / 4,
            )
        }
    }
}

/// Runs `fill(x, y)` over every pixel of the buffer. Writes go straight into
/// the shared mapping, so they are visible to the server as soon as this
/// returns and the buffer is committed.
pub fn run_fill<F>(buffer: &mut ShmBuffer, mut fill: F)
where
    F: FnMut(u32, u32) -> u32,
{
    let (width, height) = (buffer.width(), buffer.height());
    let pixels = buffer.pixels_mut();
    for y in 0..height {
        for x in 0..width {
            pixels[(y * width + x) as usize] = fill(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::libwayland::stub;

    thread_local! {
        static NEXT_PROXY: Cell<usize> = const { Cell::new(0) };
    }

    unsafe extern "C" fn allocating_marshal(
        _proxy: *mut ffi::wl_proxy,
        _opcode: u32,
        _interface: *const ffi::wl_interface,
        _version: u32,
        _flags: u32,
    ) -> *mut ffi::wl_proxy {
        NEXT_PROXY.with(|next| {
            let n = next.get() + 0x10;
            next.set(n);
            (0x5000 + n) as *mut ffi::wl_proxy
        })
    }

    fn shm_lib() -> ffi::Lib {
        let mut lib = stub::lib();
        lib.wl_proxy_marshal_flags = stub::marshal_flags(allocating_marshal);
        lib
    }

    fn fake_shm(lib: &ffi::Lib) -> Handle<'_, ffi::wl_shm> {
        Handle::acquire(lib, 0x9000 as *mut ffi::wl_shm).unwrap()
    }

    #[test]
    fn allocates_a_writable_mapping() {
        let lib = shm_lib();
        let shm = fake_shm(&lib);
        let allocator = ShmAllocator::new(std::env::temp_dir());

        let mut buffer = allocator
            .allocate(&shm, 16, 4, ffi::WL_SHM_FORMAT_ARGB8888)
            .unwrap();
        assert_eq!(buffer.stride(), 64);
        assert_eq!(buffer.pixels_mut().len(), 16 * 4);

        run_fill(&mut buffer, |x, y| x + 100 * y);
        assert_eq!(buffer.pixels_mut()[0], 0);
        assert_eq!(buffer.pixels_mut()[16 * 3 + 5], 305);
    }

    #[test]
    fn rejects_unsupported_formats() {
        let lib = shm_lib();
        let shm = fake_shm(&lib);
        let allocator = ShmAllocator::new(std::env::temp_dir());

        let err = allocator.allocate(&shm, 4, 4, 0xdead).unwrap_err();
        assert!(matches!(err, ShmError::UnsupportedFormat { format: 0xdead }));
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let lib = shm_lib();
        let shm = fake_shm(&lib);
        let allocator = ShmAllocator::new(std::env::temp_dir());

        let err = allocator
            .allocate(&shm, u32::MAX, 2, ffi::WL_SHM_FORMAT_XRGB8888)
            .unwrap_err();
        assert!(matches!(err, ShmError::TooLarge { .. }));

        let err = allocator
            .allocate(&shm, 0, 4, ffi::WL_SHM_FORMAT_XRGB8888)
            .unwrap_err();
        assert!(matches!(err, ShmError::TooLarge { .. }));
    }

    #[test]
    fn missing_runtime_dir_surfaces_create_error() {
        let lib = shm_lib();
        let shm = fake_shm(&lib);
        let allocator = ShmAllocator::new("/nonexistent/waybind-test");

        let err = allocator
            .allocate(&shm, 4, 4, ffi::WL_SHM_FORMAT_ARGB8888)
            .unwrap_err();
        assert!(matches!(err, ShmError::Create { .. }));
    }
}
