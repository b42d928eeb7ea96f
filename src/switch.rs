use crate::cross_fade::{AudioIo, CrossFader};
use crate::midi::ControlChange;

/// Which input pair the crossfade is ramping toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    A,
    B,
}

/// The per-instance router state: the binary route target and the fade
/// position carried across blocks. Starts routing A at full gain.
pub struct Switch {
    route: Route,
    fader: CrossFader,
}

impl Switch {
    pub fn new() -> Switch {
        Switch {
            route: Route::A,
            fader: CrossFader::new(0.0),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn fade(&self) -> f32 {
        self.fader.value()
    }

    // the last matching event in the block wins
    fn scan_midi<'e, I>(&mut self, events: I, cc_number: u8)
    where
        I: IntoIterator<Item = &'e [u8]>,
    {
        for bytes in events {
            match ControlChange::parse(bytes) {
                Some(cc) if cc.controller == cc_number => {
                    self.route = if cc.value >= 64 { Route::B } else { Route::A };
                }
                _ => (),
            }
        }
    }

    /// Processes one block: scans the MIDI events (if a MIDI source is
    /// connected) for Control Changes on `cc_number`, then crossfades the
    /// inputs toward whichever route the scan left active. Events earlier in
    /// the block than the last matching one have no effect of their own.
    pub fn process_block<'e, M>(&mut self, cc_number: u8, midi: Option<M>, audio: &mut AudioIo)
    where
        M: IntoIterator<Item = &'e [u8]>,
    {
        if let Some(events) = midi {
            self.scan_midi(events, cc_number);
        }
        let target = match self.route {
            Route::A => 0.0,
            Route::B => 1.0,
        };
        self.fader.process_block(target, audio);
    }
}
