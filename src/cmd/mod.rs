mod runtime_error;

use std::collections::LinkedList;
use std::io::Write;

pub use runtime_error::RuntimeError;

use crate::address::AddressList;
use crate::ip::write_ip;
#[cfg(feature = "log")]
use crate::logger::CONSOLE_LOGGER;
#[allow(unused_imports)]
#[cfg(not(feature = "log"))]
use crate::{error, warn, info, debug};
#[allow(unused_imports)]
#[cfg(feature = "log")]
use log::{error, warn, info, debug, LevelFilter};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "printIp",
    about = "print integers, strings, lists and tuples as dot-separated addresses",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cmd {
    #[arg(
        short,
        long = "file",
        help = "Print the addresses listed in this json/yaml/toml file instead of the built-in ones. Can be repeated"
    )]
    files: Vec<String>,
    #[cfg(feature = "log")]
    #[arg(short, action = clap::ArgAction::Count, help = "Set verbosity level")]
    debug: u8,
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    #[arg(short, long, help = "Don't log anything")]
    quiet: bool,
}

impl Cmd {
    pub fn main(&self) -> Result<(), RuntimeError> {
        #[cfg(feature = "log")]
        {
            if log::set_logger(&CONSOLE_LOGGER).is_ok() {
                log::set_max_level(if self.quiet {
                    LevelFilter::Off
                } else {
                    match self.debug {
                        v if v >= 2 => LevelFilter::Debug,
                        1 => LevelFilter::Info,
                        _ => LevelFilter::Warn,
                    }
                });
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Writes every selected address to `out`, one line each.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), RuntimeError> {
        if self.files.is_empty() {
            debug!("no file given, printing built-in addresses");
            return Ok(write_builtin(out)?);
        }

        for f in &self.files {
            // a bad file stops everything before any of its addresses are printed
            let list = AddressList::try_from(f.as_str())?;
            if list.is_empty() {
                warn!("{} contains no addresses", f);
            }
            for address in &list {
                debug!("{} address: {:?}", address.shape(), address);
                write_ip(out, address)?;
            }
        }
        Ok(())
    }
}

/// Writes the built-in demonstration addresses, covering every shape.
pub fn write_builtin<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    write_ip(out, -1i8)?;
    write_ip(out, 0i16)?;
    write_ip(out, 2130706433i32)?;
    write_ip(out, 8875824491850138409i64)?;
    write_ip(out, "Hello, World!")?;
    write_ip(out, vec![100, 200, 300, 400])?;
    write_ip(out, LinkedList::from([400, 300, 200, 100]))?;
    write_ip(out, (123, 456, 789, 0))?;
    Ok(())
}
