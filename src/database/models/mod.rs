pub mod mapa;
pub mod ponto;

pub use mapa::{Mapa, MapaSummary};
pub use ponto::Ponto;
