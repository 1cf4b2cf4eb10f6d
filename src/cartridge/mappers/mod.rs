// Mapper dispatch - closed set of supported cartridge mappers
//
// Each supported iNES mapper is a fixed, enumerable piece of hardware, so
// dispatch is a tagged union rather than a `Box<dyn Mapper>` trait object:
// there are exactly five variants, never loaded dynamically, and every call
// site already knows the full set at compile time.

pub mod mapper0;
pub mod mapper1;
pub mod mapper2;
pub mod mapper3;
pub mod mapper4;

/// Live bank-switching state for the active mapper. `Cartridge` holds one of
/// these alongside the ROM bytes and dispatches reads/writes into the
/// matching module's free functions.
pub enum MapperState {
    Nrom,
    Mmc1(mapper1::Mmc1State),
    Unrom(mapper2::UnromState),
    Cnrom(mapper3::CnromState),
    Mmc3(mapper4::Mmc3State),
}
