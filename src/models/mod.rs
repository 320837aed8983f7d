pub mod birth;
pub mod horoscope;
pub mod matching;
pub mod nakshatra;
pub mod panchang;
pub mod zodiac;

pub use birth::*;
pub use horoscope::*;
pub use matching::*;
pub use nakshatra::*;
pub use panchang::*;
pub use zodiac::*;
