pub mod scan_observer;

pub use scan_observer::ScanObserver;
#[cfg(test)]
pub use scan_observer::MockScanObserver;
