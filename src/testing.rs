//! Fixtures shared by unit tests.

use rand::RngCore;
use serde_json::json;

use crate::source::MemorySource;

/// Replays a fixed sequence of u32 values, cycling when exhausted
pub struct ScriptedRng {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A small but complete park data set
pub fn magic_mountain_source() -> MemorySource {
    MemorySource::new()
        .with(
            "MagicMountain",
            json!({
                "midCoord": "{34.4248, -118.5971}",
                "overlayTopLeftCoord": "{34.4311, -118.6012}",
                "overlayTopRightCoord": "{34.4311, -118.5912}",
                "overlayBottomLeftCoord": "{34.4194, -118.6012}",
                "boundary": [
                    "{34.4313, -118.5990}",
                    "{34.4275, -118.5918}",
                    "{34.4200, -118.5950}",
                    "{34.4196, -118.6010}"
                ]
            }),
        )
        .with(
            "MagicMountainAttractions",
            json!([{
                "location": "{10.0, 20.0}",
                "name": "Goliath",
                "type": "1",
                "subtitle": "Coaster"
            }]),
        )
        .with(
            "EntranceToGoliathRoute",
            json!(["{34.4195, -118.5985}", "{34.4221, -118.5970}", "{34.4252, -118.5949}"]),
        )
        .with(
            "BatmanLocations",
            json!(["{34.4248, -118.5971}", "{34.4268, -118.5986}", "{34.4230, -118.5950}", "{34.4210, -118.5999}"]),
        )
        .with(
            "TazLocations",
            json!(["{34.4240, -118.5961}", "{34.4255, -118.5940}", "{34.4222, -118.5990}", "{34.4280, -118.5975}"]),
        )
        .with(
            "TweetyBirdLocations",
            json!(["{34.4233, -118.5980}", "{34.4262, -118.5958}", "{34.4219, -118.5966}", "{34.4270, -118.5992}"]),
        )
}
