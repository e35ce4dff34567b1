use crate::session::timer::TimerCommand;

#[derive(Debug, PartialEq)]
pub enum Action {
    Timer(TimerCommand),
    Quit,
}
