mod memory;

pub use memory::{
    InMemoryPreferenceRepository, InMemoryTranscriptRepository, InMemoryUserVideoRepository,
    InMemoryVideoRepository,
};
