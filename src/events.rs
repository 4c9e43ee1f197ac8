use std::io;
use std::sync::mpsc;
use std::thread;

use termion::event::Key;
use termion::input::TermRead;

pub enum Event {
    Input(Key),
    InputClosed,
}

/// Reads keys from stdin on a separate thread and hands them out one by one.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    _input_handle: thread::JoinHandle<()>,
}

impl Default for Dispatcher {
    fn default() -> Dispatcher {
        Dispatcher::new()
    }
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        let (tx, rx) = mpsc::channel();
        let input_handle = thread::spawn(move || {
            let stdin = io::stdin();
            let stdin = stdin.lock();
            for key in stdin.keys() {
                match key {
                    Ok(key) => {
                        if tx.send(Event::Input(key)).is_err() {
                            return;
                        }
                    }
                    Err(e) => log::warn!("Failed to read key: {}", e),
                }
            }
            let _ = tx.send(Event::InputClosed);
        });

        Dispatcher {
            rx,
            _input_handle: input_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// What a key press asks the interactive calendar to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    NextYear,
    PrevYear,
    StartYear,
    Exit,
    Noop,
}

impl From<Key> for Cmd {
    fn from(key: Key) -> Self {
        match key {
            Key::Char('l') | Key::Char('+') | Key::Right => Cmd::NextYear,
            Key::Char('h') | Key::Char('-') | Key::Left => Cmd::PrevYear,
            Key::Char('t') => Cmd::StartYear,
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => Cmd::Exit,
            _ => Cmd::Noop,
        }
    }
}
