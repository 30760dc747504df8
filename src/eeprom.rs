//! Emulated eeprom on top of any storage device which implements the
//! `embedded-storage` `Storage` trait, holding the persisted keymap config.
//!
//! Layout: a 2-byte big-endian magic value, then the 1-byte default layer.
//! The whole area is cached in RAM; reads are answered from the cache and
//! writes go through to the device.

use byteorder::{BigEndian, ByteOrder};
use embedded_storage::{ReadStorage, Storage};

/// EEPROM magic value.
/// If the first 2 bytes of eeprom equal it, eeprom is enabled.
pub(crate) const EEPROM_MAGIC: u16 = 0xFEE6;
const EEPROM_DISABLED_MAGIC: u16 = 0xFFFF;

/// Start index of eeprom magic value
const MAGIC_ADDR: u32 = 0;
/// Size of eeprom magic value: 2 bytes
const MAGIC_SIZE: usize = 2;
/// Index of default layer in eeprom
const DEFAULT_LAYER_ADDR: u32 = 2;

/// The single-byte persistence seam consumed by the event handler for
/// default-layer keys. Writes are fire-and-forget; implementations log
/// failures instead of surfacing them.
pub trait DefaultLayerStore {
    fn store_default_layer(&mut self, layer: u8);
}

pub struct Eeprom<F: Storage, const EEPROM_SIZE: usize> {
    storage: F,
    cache: [u8; EEPROM_SIZE],
}

impl<F: Storage, const EEPROM_SIZE: usize> Eeprom<F, EEPROM_SIZE> {
    /// Open the eeprom and fill the cache from the device.
    pub fn new(mut storage: F) -> Result<Self, F::Error> {
        let mut cache = [0xFF; EEPROM_SIZE];
        storage.read(0, &mut cache)?;
        Ok(Self { storage, cache })
    }

    /// Enable or disable eeprom by writing magic value
    pub fn set_enable(&mut self, enabled: bool) -> Result<(), F::Error> {
        let magic = if enabled { EEPROM_MAGIC } else { EEPROM_DISABLED_MAGIC };
        let mut buf = [0xFF; MAGIC_SIZE];
        BigEndian::write_u16(&mut buf, magic);
        self.write_bytes(MAGIC_ADDR, &buf)
    }

    /// Returns eeprom magic value stored in EEPROM
    pub fn get_magic(&self) -> u16 {
        BigEndian::read_u16(&self.cache[..MAGIC_SIZE])
    }

    pub fn is_enabled(&self) -> bool {
        self.get_magic() == EEPROM_MAGIC
    }

    /// Set default layer
    pub fn set_default_layer(&mut self, default_layer: u8) -> Result<(), F::Error> {
        self.write_bytes(DEFAULT_LAYER_ADDR, &[default_layer])
    }

    /// Returns current default layer
    pub fn get_default_layer(&self) -> u8 {
        self.cache[DEFAULT_LAYER_ADDR as usize]
    }

    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), F::Error> {
        self.cache[addr as usize..addr as usize + data.len()].copy_from_slice(data);
        self.storage.write(addr, data)
    }
}

impl<F: Storage, const EEPROM_SIZE: usize> DefaultLayerStore for Eeprom<F, EEPROM_SIZE> {
    fn store_default_layer(&mut self, layer: u8) {
        if self.set_default_layer(layer).is_err() {
            error!("Failed to persist default layer {}", layer);
        }
    }
}
