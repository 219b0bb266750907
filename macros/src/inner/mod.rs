// Macros used by the tola-traits crate itself
//
// - peano: D0..Dn natural-number aliases

pub mod peano;
