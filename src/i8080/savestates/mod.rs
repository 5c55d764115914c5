use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

use super::cpu::CPU;
use super::{I8080, MEMORY_SIZE};

const SAVE_STATE_MAGIC: [u8; 2] = [0x80, 0x80];
const SAVE_STATE_VERSION: u8 = 0;

/// Save-state wire format: the 2-byte magic and a version byte, then the
/// length-prefixed bincode encoding of the processor state, then the
/// memory image deflate-compressed.
const SAVE_STATE_HEADER_LENGTH: usize = 7;

#[derive(Debug)]
pub enum SaveStateError {
	InvalidHeader,
	UnsupportedVersion(u8),
	InvalidMemoryLength { length: usize },
	Serialization(bincode::Error),
	Io(io::Error),
}

impl Display for SaveStateError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			SaveStateError::InvalidHeader => {
				write!(f, "save state header is missing or malformed")
			},
			SaveStateError::UnsupportedVersion(version) => {
				write!(f, "unsupported save state version {}", version)
			},
			SaveStateError::InvalidMemoryLength { length } => {
				write!(f, "expected a {} byte memory image, found {} bytes", MEMORY_SIZE, length)
			},
			SaveStateError::Serialization(error) => {
				write!(f, "failed to encode or decode processor state: {}", error)
			},
			SaveStateError::Io(error) => {
				write!(f, "failed to compress or decompress memory image: {}", error)
			},
		}
	}
}

impl Error for SaveStateError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			SaveStateError::Serialization(error) => Some(error),
			SaveStateError::Io(error) => Some(error),
			_ => None,
		}
	}
}

impl From<bincode::Error> for SaveStateError {
	fn from(error: bincode::Error) -> SaveStateError {
		SaveStateError::Serialization(error)
	}
}

impl From<io::Error> for SaveStateError {
	fn from(error: io::Error) -> SaveStateError {
		SaveStateError::Io(error)
	}
}

/// Snapshot serialization of a whole machine. I/O hooks are not part of a
/// snapshot; the host re-registers them after loading.
pub trait SerializeState: Sized {
	fn save_state(&self) -> Result<Vec<u8>, SaveStateError>;
	fn load_state(&mut self, buf: &[u8]) -> Result<(), SaveStateError>;
}

impl SerializeState for I8080 {
	fn save_state(&self) -> Result<Vec<u8>, SaveStateError> {
		let cpu = bincode::serialize(&self.cpu)?;

		let mut buf = Vec::new();
		buf.extend_from_slice(&SAVE_STATE_MAGIC);
		buf.push(SAVE_STATE_VERSION);
		buf.extend_from_slice(&(cpu.len() as u32).to_be_bytes());
		buf.extend_from_slice(&cpu);

		let mut encoder = DeflateEncoder::new(buf, Compression::default());
		encoder.write_all(&self.memory)?;
		Ok(encoder.finish()?)
	}

	/// Restore a snapshot. The machine is left untouched unless the whole
	/// buffer validates.
	fn load_state(&mut self, buf: &[u8]) -> Result<(), SaveStateError> {
		if buf.len() < SAVE_STATE_HEADER_LENGTH || buf[0..2] != SAVE_STATE_MAGIC {
			return Err(SaveStateError::InvalidHeader);
		}
		if buf[2] != SAVE_STATE_VERSION {
			return Err(SaveStateError::UnsupportedVersion(buf[2]));
		}

		let cpu_length = u32::from_be_bytes([buf[3], buf[4], buf[5], buf[6]]) as usize;
		if buf.len() < SAVE_STATE_HEADER_LENGTH + cpu_length {
			return Err(SaveStateError::InvalidHeader);
		}

		let body = &buf[SAVE_STATE_HEADER_LENGTH..];
		let cpu: CPU = bincode::deserialize(&body[..cpu_length])?;

		let mut memory = Vec::with_capacity(MEMORY_SIZE);
		DeflateDecoder::new(&body[cpu_length..]).read_to_end(&mut memory)?;
		if memory.len() != MEMORY_SIZE {
			return Err(SaveStateError::InvalidMemoryLength { length: memory.len() });
		}

		self.cpu = cpu;
		self.memory.copy_from_slice(&memory);
		Ok(())
	}
}
