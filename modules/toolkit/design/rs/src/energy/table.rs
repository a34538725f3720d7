use std::ops::{Add, AddAssign};

/// Enthalpy (kcal/mol) and entropy (cal/(K*mol)) contribution of a duplex element.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Thermo {
    pub enthalpy: f64,
    pub entropy: f64,
}

impl Thermo {
    pub const fn new(enthalpy: f64, entropy: f64) -> Self {
        Self { enthalpy, entropy }
    }

    /// Gibbs free energy (kcal/mol) at the given absolute temperature.
    pub fn gibbs(&self, kelvin: f64) -> f64 {
        self.enthalpy - kelvin * self.entropy / 1000.0
    }
}

impl Add for Thermo {
    type Output = Thermo;

    fn add(self, rhs: Self) -> Self::Output {
        Thermo::new(self.enthalpy + rhs.enthalpy, self.entropy + rhs.entropy)
    }
}

impl AddAssign for Thermo {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Initiation penalties for each terminal base pair of the duplex
pub(crate) const INIT_TERMINAL_AT: Thermo = Thermo::new(2.3, 4.1);
pub(crate) const INIT_TERMINAL_GC: Thermo = Thermo::new(0.1, -2.8);

/// Watson-Crick nearest-neighbour stack, e.g. `top = AC` over `bottom = TG` (`AC/TG`).
///
/// DNA parameters of Allawi & SantaLucia (1997). Each stack is listed once; the reverse reading
/// of the duplex (`GT/CA` for `AC/TG`) is tried when the direct one is absent.
pub fn stack_energy(top: [u8; 2], bottom: [u8; 2]) -> Option<Thermo> {
    stack(top, bottom).or_else(|| stack([bottom[1], bottom[0]], [top[1], top[0]]))
}

fn stack(top: [u8; 2], bottom: [u8; 2]) -> Option<Thermo> {
    let thermo = match (&top, &bottom) {
        (b"AA", b"TT") => Thermo::new(-7.9, -22.2),
        (b"AT", b"TA") => Thermo::new(-7.2, -20.4),
        (b"TA", b"AT") => Thermo::new(-7.2, -21.3),
        (b"CA", b"GT") => Thermo::new(-8.5, -22.7),
        (b"GT", b"CA") => Thermo::new(-8.4, -22.4),
        (b"CT", b"GA") => Thermo::new(-7.8, -21.0),
        (b"GA", b"CT") => Thermo::new(-8.2, -22.2),
        (b"CG", b"GC") => Thermo::new(-10.6, -27.2),
        (b"GC", b"CG") => Thermo::new(-9.8, -24.4),
        (b"GG", b"CC") => Thermo::new(-8.0, -19.9),
        _ => return None,
    };
    Some(thermo)
}

/// Single dangling nucleotide next to a terminal pair, `.` marking the missing partner.
///
/// `XY/.Z`: top-strand `X` dangles over the `Y-Z` pair. `.X/YZ`: bottom-strand `Y` dangles under
/// the `X-Z` pair. Values of Bommarito et al. (2000).
pub fn dangling_end(top: [u8; 2], bottom: [u8; 2]) -> Option<Thermo> {
    let thermo = match (&top, &bottom) {
        (b"AA", b".T") => Thermo::new(0.2, 2.3),
        (b"AC", b".G") => Thermo::new(-6.3, -17.1),
        (b"AG", b".C") => Thermo::new(-3.7, -10.0),
        (b"AT", b".A") => Thermo::new(-2.9, -7.6),
        (b"CA", b".T") => Thermo::new(0.6, 3.3),
        (b"CC", b".G") => Thermo::new(-4.4, -12.6),
        (b"CG", b".C") => Thermo::new(-4.0, -11.9),
        (b"CT", b".A") => Thermo::new(-4.1, -13.0),
        (b"GA", b".T") => Thermo::new(-1.1, -1.6),
        (b"GC", b".G") => Thermo::new(-5.1, -14.0),
        (b"GG", b".C") => Thermo::new(-3.9, -10.9),
        (b"GT", b".A") => Thermo::new(-4.2, -15.0),
        (b"TA", b".T") => Thermo::new(-6.9, -20.0),
        (b"TC", b".G") => Thermo::new(-4.0, -10.9),
        (b"TG", b".C") => Thermo::new(-4.9, -13.8),
        (b"TT", b".A") => Thermo::new(-0.2, -0.5),
        (b".A", b"AT") => Thermo::new(-0.7, -0.8),
        (b".C", b"AG") => Thermo::new(-2.1, -3.9),
        (b".G", b"AC") => Thermo::new(-5.9, -16.5),
        (b".T", b"AA") => Thermo::new(-0.5, -1.1),
        (b".A", b"CT") => Thermo::new(4.4, 14.9),
        (b".C", b"CG") => Thermo::new(-0.2, -0.1),
        (b".G", b"CC") => Thermo::new(-2.6, -7.4),
        (b".T", b"CA") => Thermo::new(4.7, 14.2),
        (b".A", b"GT") => Thermo::new(-1.6, -3.6),
        (b".C", b"GG") => Thermo::new(-3.9, -11.2),
        (b".G", b"GC") => Thermo::new(-3.2, -10.4),
        (b".T", b"GA") => Thermo::new(-4.1, -13.1),
        (b".A", b"TT") => Thermo::new(2.9, 10.4),
        (b".C", b"TG") => Thermo::new(-4.4, -13.1),
        (b".G", b"TC") => Thermo::new(-5.2, -15.0),
        (b".T", b"TA") => Thermo::new(-3.8, -12.6),
        _ => return None,
    };
    Some(thermo)
}
