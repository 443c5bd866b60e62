//! # Camera
//!
//! Single-frame capture from an attached camera.
//!
//! The hardware sits behind [`CameraDevice`] so handlers never talk to a device
//! directly. A device is opened, read once and released on every path,
//! including the ones where no frame comes back.
//!
//! ## Production adapter
//! [`FfmpegCamera`] drives `ffmpeg` against the V4L2 node `/dev/video{index}`
//! and reads one MJPEG frame from its stdout.
//!
//! ```sh
//! ffmpeg -f v4l2 -i /dev/video0 -frames:v 1 -f image2pipe -vcodec mjpeg -
//! ```
use std::{
    io,
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

pub const CAPTURED_IMAGE_FILE: &str = "captured_image.jpg";
pub const CAPTURED_IMAGE_URL: &str = "/static/captured_image.jpg";

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("camera {0} unavailable")]
    Unavailable(String),

    #[error("failed to read frame: {0}")]
    ReadFailed(String),

    #[error("camera returned no frame")]
    NoFrame,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Opens camera devices by index.
pub trait CameraDevice: Send + Sync {
    fn open(&self, index: u32) -> Result<Box<dyn CameraHandle>, CameraError>;
}

/// An opened device. Must be released exactly once.
pub trait CameraHandle: Send {
    /// `Ok(None)` when the device answered without a frame.
    fn read_frame(&mut self) -> Result<Option<Vec<u8>>, CameraError>;

    fn release(self: Box<Self>);
}

/// Opens camera `index`, reads a single frame and releases the device.
///
/// Blocking. No retry and no timeout.
pub fn capture_frame(device: &dyn CameraDevice, index: u32) -> Result<Vec<u8>, CameraError> {
    let mut handle = device.open(index)?;
    let frame = handle.read_frame();
    handle.release();

    frame?.ok_or(CameraError::NoFrame)
}

/// Writes a captured frame to the fixed file inside `static_dir`, overwriting
/// the previous capture.
pub async fn save_capture(static_dir: &Path, data: &[u8]) -> Result<PathBuf, CameraError> {
    fs::create_dir_all(static_dir).await?;

    let path = static_dir.join(CAPTURED_IMAGE_FILE);
    fs::write(&path, data).await?;

    debug!(path = %path.display(), size = data.len(), "Saved captured image");

    Ok(path)
}

pub struct FfmpegCamera;

impl CameraDevice for FfmpegCamera {
    fn open(&self, index: u32) -> Result<Box<dyn CameraHandle>, CameraError> {
        let device = format!("/dev/video{index}");

        if !Path::new(&device).exists() {
            return Err(CameraError::Unavailable(device));
        }

        let child = Command::new("ffmpeg")
            .args([
                "-f",
                "v4l2",
                "-i",
                device.as_str(),
                "-frames:v",
                "1",
                "-f",
                "image2pipe",
                "-vcodec",
                "mjpeg",
                "-loglevel",
                "error",
                "-y",
                "-",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                warn!(device = %device, error = %e, "ffmpeg spawn failed");
                CameraError::Unavailable(device.clone())
            })?;

        Ok(Box::new(FfmpegHandle { child: Some(child) }))
    }
}

struct FfmpegHandle {
    child: Option<Child>,
}

impl CameraHandle for FfmpegHandle {
    fn read_frame(&mut self) -> Result<Option<Vec<u8>>, CameraError> {
        let Some(child) = self.child.take() else {
            return Ok(None);
        };
        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CameraError::ReadFailed(stderr.trim().to_string()));
        }

        if output.stdout.is_empty() {
            return Ok(None);
        }

        Ok(Some(output.stdout))
    }

    fn release(mut self: Box<Self>) {
        self.kill_child();
    }
}

impl FfmpegHandle {
    fn kill_child(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for FfmpegHandle {
    fn drop(&mut self) {
        self.kill_child();
    }
}
