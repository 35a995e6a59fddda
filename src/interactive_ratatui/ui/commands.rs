#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch { id: u64, delay_ms: u64 },
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}
