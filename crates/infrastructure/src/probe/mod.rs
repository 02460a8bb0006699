mod ping;

pub use ping::SystemPingProbe;
