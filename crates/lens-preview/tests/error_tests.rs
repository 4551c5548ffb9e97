use lens_preview::PreviewError;
use std::io;

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "camera not found");
    let err: PreviewError = io_err.into();

    match err {
        PreviewError::Device(msg) => assert!(msg.contains("camera not found")),
        _ => panic!("Expected PreviewError::Device variant"),
    }
}

#[test]
fn test_from_permission_denied_io_error() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "CAMERA not granted");
    let err: PreviewError = io_err.into();

    assert!(matches!(err, PreviewError::Permission(_)));
}

#[test]
fn test_error_display() {
    let permission = PreviewError::Permission("CAMERA not granted".to_string());
    assert!(permission.to_string().contains("CAMERA not granted"));

    let device = PreviewError::Device("busy".to_string());
    assert!(device.to_string().contains("busy"));

    assert!(PreviewError::SourceAttached.to_string().contains("already attached"));
}
