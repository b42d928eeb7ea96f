use crate::ab_switch_control;
use crate::config::Config;
use crate::cross_fade::AudioIo;
use crate::switch::Switch;
use thiserror::Error;

struct AbSwitch {
    in_a_l: jack::Port<jack::AudioIn>,
    in_a_r: jack::Port<jack::AudioIn>,
    in_b_l: jack::Port<jack::AudioIn>,
    in_b_r: jack::Port<jack::AudioIn>,
    out_a_l: jack::Port<jack::AudioOut>,
    out_a_r: jack::Port<jack::AudioOut>,
    out_b_l: jack::Port<jack::AudioOut>,
    out_b_r: jack::Port<jack::AudioOut>,
    midi_in: jack::Port<jack::MidiIn>,

    cc_number: u8,
    switch: Switch,

    control: ab_switch_control::Receiver,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    JackError(#[from] jack::Error),
}

impl AbSwitch {
    fn new(
        client: &jack::Client,
        config: Config,
        control: ab_switch_control::Receiver,
    ) -> Result<AbSwitch, Error> {
        let in_a_l = client.register_port("in_a_l", jack::AudioIn::default())?;
        let in_a_r = client.register_port("in_a_r", jack::AudioIn::default())?;
        let in_b_l = client.register_port("in_b_l", jack::AudioIn::default())?;
        let in_b_r = client.register_port("in_b_r", jack::AudioIn::default())?;
        let out_a_l = client.register_port("out_a_l", jack::AudioOut::default())?;
        let out_a_r = client.register_port("out_a_r", jack::AudioOut::default())?;
        let out_b_l = client.register_port("out_b_l", jack::AudioOut::default())?;
        let out_b_r = client.register_port("out_b_r", jack::AudioOut::default())?;
        let midi_in = client.register_port("midi_in", jack::MidiIn::default())?;

        Ok(AbSwitch {
            in_a_l,
            in_a_r,
            in_b_l,
            in_b_r,
            out_a_l,
            out_a_r,
            out_b_l,
            out_b_r,
            midi_in,

            cc_number: config.control.cc_number,
            switch: Switch::new(),

            control,
        })
    }

    fn process_control(&mut self) {
        if let Ok(ab_switch_control::Message::UpdateConfig(config)) = self.control.try_recv() {
            self.cc_number = config.control.cc_number;
        }
    }

    fn process(&mut self, ps: &jack::ProcessScope) -> jack::Control {
        self.process_control();

        let midi_in = self.midi_in.iter(ps);
        let mut io = AudioIo {
            in_a_left: Some(self.in_a_l.as_slice(ps)),
            in_a_right: Some(self.in_a_r.as_slice(ps)),
            in_b_left: Some(self.in_b_l.as_slice(ps)),
            in_b_right: Some(self.in_b_r.as_slice(ps)),
            out_a_left: self.out_a_l.as_mut_slice(ps),
            out_a_right: self.out_a_r.as_mut_slice(ps),
            out_b_left: self.out_b_l.as_mut_slice(ps),
            out_b_right: self.out_b_r.as_mut_slice(ps),
        };
        self.switch.process_block(
            self.cc_number,
            Some(midi_in.map(|event| event.bytes)),
            &mut io,
        );

        jack::Control::Continue
    }
}

pub fn main(
    config: Config,
    control: ab_switch_control::Receiver,
    shutdown: crossbeam_channel::Receiver<()>,
) -> Result<(), Error> {
    let (client, _status) = jack::Client::new("ab_switch", jack::ClientOptions::NO_START_SERVER)?;

    let mut ab_switch = AbSwitch::new(&client, config, control)?;

    let process = jack::ClosureProcessHandler::new(
        move |_: &jack::Client, ps: &jack::ProcessScope| -> jack::Control {
            ab_switch.process(ps)
        },
    );

    let active_client = client.activate_async((), process)?;

    // returns on message or when the last sender is dropped
    let _ = shutdown.recv();

    active_client.deactivate()?;

    Ok(())
}
