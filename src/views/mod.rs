mod escala;

pub use escala::Escala;
