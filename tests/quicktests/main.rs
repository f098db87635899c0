use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a container in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the container
    Add(T),
    /// Remove the T from the container
    Remove(T),
    /// Remove the smallest element
    Poll,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Poll,
            _ => unreachable!(),
        }
    }
}

static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .format(|w, now, record| {
                write!(
                    w,
                    "{} [{}] {}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                )
            })
            .start()
            .unwrap(),
    )
});

/// Installs the test logger. Set `RUST_LOG=trace` to see every structural change.
pub(crate) fn init_logger() {
    let _ = &*LOGGER;
}
