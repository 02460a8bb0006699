mod prober;

pub use prober::HostProber;
