use crate::interactivity::{StyleError, StyleFlags, WindowStyleOps};
use crate::placement::WorkArea;

#[cfg(target_os = "windows")]
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
#[cfg(target_os = "windows")]
use windows::Win32::Foundation::HWND;

#[cfg(target_os = "windows")]
pub fn get_hwnd(frame: &eframe::Frame) -> Option<HWND> {
    frame.window_handle().ok().and_then(|wh| match wh.as_raw() {
        RawWindowHandle::Win32(handle) => {
            Some(HWND(handle.hwnd.get() as *mut core::ffi::c_void))
        }
        _ => None,
    })
}

/// Production backend for [`WindowStyleOps`]: raw `GWL_EXSTYLE` manipulation
/// on the overlay's HWND.
#[cfg(target_os = "windows")]
pub struct Win32StyleOps {
    hwnd: HWND,
}

#[cfg(target_os = "windows")]
impl Win32StyleOps {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    fn check_handle(&self) -> Result<(), StyleError> {
        use windows::Win32::UI::WindowsAndMessaging::IsWindow;
        if unsafe { IsWindow(self.hwnd) }.as_bool() {
            Ok(())
        } else {
            Err(StyleError::InvalidHandle)
        }
    }
}

#[cfg(target_os = "windows")]
impl WindowStyleOps for Win32StyleOps {
    fn ex_style(&self) -> Result<StyleFlags, StyleError> {
        use windows::Win32::Foundation::{GetLastError, SetLastError, WIN32_ERROR};
        use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, GWL_EXSTYLE};

        self.check_handle()?;
        // GetWindowLongPtrW signals failure by returning 0 with a last error
        // set; 0 is also a legal style value, hence the dance.
        unsafe { SetLastError(WIN32_ERROR(0)) };
        let style = unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) };
        if style == 0 && unsafe { GetLastError() } != WIN32_ERROR(0) {
            return Err(StyleError::StyleQueryFailed);
        }
        Ok(StyleFlags(style))
    }

    fn set_ex_style(&self, style: StyleFlags) -> Result<(), StyleError> {
        use windows::Win32::Foundation::{GetLastError, SetLastError, WIN32_ERROR};
        use windows::Win32::UI::WindowsAndMessaging::{SetWindowLongPtrW, GWL_EXSTYLE};

        self.check_handle()?;
        unsafe { SetLastError(WIN32_ERROR(0)) };
        let previous = unsafe { SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, style.0) };
        if previous == 0 && unsafe { GetLastError() } != WIN32_ERROR(0) {
            return Err(StyleError::StyleSetFailed);
        }
        Ok(())
    }

    fn begin_move(&self) -> Result<(), StyleError> {
        use windows::Win32::Foundation::{LPARAM, WPARAM};
        use windows::Win32::UI::WindowsAndMessaging::{
            ReleaseCapture, SendMessageW, HTCAPTION, WM_NCLBUTTONDOWN,
        };

        self.check_handle()?;
        unsafe {
            let _ = ReleaseCapture();
            SendMessageW(
                self.hwnd,
                WM_NCLBUTTONDOWN,
                WPARAM(HTCAPTION as usize),
                LPARAM(0),
            );
        }
        Ok(())
    }
}

/// Stand-in backend for platforms without extended window styles. Every call
/// reports an invalid handle, which the controller treats as a skipped tick.
#[cfg(not(target_os = "windows"))]
pub struct UnsupportedStyleOps;

#[cfg(not(target_os = "windows"))]
impl WindowStyleOps for UnsupportedStyleOps {
    fn ex_style(&self) -> Result<StyleFlags, StyleError> {
        Err(StyleError::InvalidHandle)
    }

    fn set_ex_style(&self, _style: StyleFlags) -> Result<(), StyleError> {
        Err(StyleError::InvalidHandle)
    }

    fn begin_move(&self) -> Result<(), StyleError> {
        Err(StyleError::InvalidHandle)
    }
}

#[cfg(target_os = "windows")]
pub type OverlayStyleOps = Win32StyleOps;
#[cfg(not(target_os = "windows"))]
pub type OverlayStyleOps = UnsupportedStyleOps;

/// Style backend for the window behind an eframe [`Frame`], if it has a
/// usable OS handle yet.
#[cfg(target_os = "windows")]
pub fn style_ops(frame: &eframe::Frame) -> Option<OverlayStyleOps> {
    get_hwnd(frame).map(Win32StyleOps::new)
}

#[cfg(not(target_os = "windows"))]
pub fn style_ops(_frame: &eframe::Frame) -> Option<OverlayStyleOps> {
    None
}

/// Live state of the drag modifier (Shift), polled rather than event-driven
/// because a no-activate pass-through window never receives key events.
#[cfg(target_os = "windows")]
pub fn modifier_down() -> bool {
    use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, VK_SHIFT};
    unsafe { (GetAsyncKeyState(VK_SHIFT.0 as i32) as u16 & 0x8000) != 0 }
}

#[cfg(not(target_os = "windows"))]
pub fn modifier_down() -> bool {
    false
}

/// Primary-monitor working area (desktop minus taskbar), in physical pixels.
#[cfg(target_os = "windows")]
pub fn work_area() -> Option<WorkArea> {
    use windows::Win32::Foundation::RECT;
    use windows::Win32::UI::WindowsAndMessaging::{
        SystemParametersInfoW, SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
    };

    let mut rect = RECT::default();
    let ok = unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(&mut rect as *mut RECT as *mut core::ffi::c_void),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
    };
    if ok.is_err() {
        return None;
    }
    Some(WorkArea {
        x: rect.left as f32,
        y: rect.top as f32,
        width: (rect.right - rect.left) as f32,
        height: (rect.bottom - rect.top) as f32,
    })
}

#[cfg(not(target_os = "windows"))]
pub fn work_area() -> Option<WorkArea> {
    None
}
