use std::{self, error, io};
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// The input ended before the value was complete
    EndOfBufferError,

    /// The input contains more bytes than the value needs
    TrailingBytes(usize),

    /// The requested type has no network encoding
    Unsupported(&'static str),

    /// Raised from a `Serialize` or `Deserialize` implementation
    Custom(String),

    IOError(io::Error)
}

pub type Result<T> = std::result::Result<T, Error>;


impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref io) => Some(io),
            _ => None
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(desc: T) -> Error {
        Error::Custom(desc.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EndOfBufferError    => f.write_str("Unexpected end of buffer"),
            Error::TrailingBytes(n)    => write!(f, "{} trailing bytes after value", n),
            Error::Unsupported(what)   => write!(f, "{} has no network encoding", what),
            Error::Custom(ref msg)     => f.write_str(msg),
            Error::IOError(ref io)     => write!(f, "io error: {}", io),
        }
    }
}


impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        // reading from a slice only fails when it runs out
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::EndOfBufferError
        }
        else {
            Error::IOError(err)
        }
    }
}
