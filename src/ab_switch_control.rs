pub enum Message {
    UpdateConfig(crate::config::Config),
}

pub type Receiver = crossbeam_channel::Receiver<Message>;
pub type Sender = crossbeam_channel::Sender<Message>;

pub fn channel() -> (Sender, Receiver) {
    crossbeam_channel::unbounded()
}
