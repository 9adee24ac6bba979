//! Periodic table data: atomic weights and covalent radii.
//!
//! Covalent radii are the single-bond values of Cordero et al. (2008), which
//! are also what bond-cutoff neighbor searches conventionally start from.

/// A chemical element from the periodic table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_weight: f64,
    /// Single-bond covalent radius in Angstroms.
    pub covalent_radius: f64,
}

/// Elements 1–96 (H through Cm).
static ELEMENTS: [Element; 96] = [
    Element { atomic_number: 1, symbol: "H", name: "Hydrogen", atomic_weight: 1.008, covalent_radius: 0.31 },
    Element { atomic_number: 2, symbol: "He", name: "Helium", atomic_weight: 4.003, covalent_radius: 0.28 },
    Element { atomic_number: 3, symbol: "Li", name: "Lithium", atomic_weight: 6.941, covalent_radius: 1.28 },
    Element { atomic_number: 4, symbol: "Be", name: "Beryllium", atomic_weight: 9.012, covalent_radius: 0.96 },
    Element { atomic_number: 5, symbol: "B", name: "Boron", atomic_weight: 10.81, covalent_radius: 0.84 },
    Element { atomic_number: 6, symbol: "C", name: "Carbon", atomic_weight: 12.011, covalent_radius: 0.76 },
    Element { atomic_number: 7, symbol: "N", name: "Nitrogen", atomic_weight: 14.007, covalent_radius: 0.71 },
    Element { atomic_number: 8, symbol: "O", name: "Oxygen", atomic_weight: 15.999, covalent_radius: 0.66 },
    Element { atomic_number: 9, symbol: "F", name: "Fluorine", atomic_weight: 18.998, covalent_radius: 0.57 },
    Element { atomic_number: 10, symbol: "Ne", name: "Neon", atomic_weight: 20.180, covalent_radius: 0.58 },
    Element { atomic_number: 11, symbol: "Na", name: "Sodium", atomic_weight: 22.990, covalent_radius: 1.66 },
    Element { atomic_number: 12, symbol: "Mg", name: "Magnesium", atomic_weight: 24.305, covalent_radius: 1.41 },
    Element { atomic_number: 13, symbol: "Al", name: "Aluminum", atomic_weight: 26.982, covalent_radius: 1.21 },
    Element { atomic_number: 14, symbol: "Si", name: "Silicon", atomic_weight: 28.086, covalent_radius: 1.11 },
    Element { atomic_number: 15, symbol: "P", name: "Phosphorus", atomic_weight: 30.974, covalent_radius: 1.07 },
    Element { atomic_number: 16, symbol: "S", name: "Sulfur", atomic_weight: 32.06, covalent_radius: 1.05 },
    Element { atomic_number: 17, symbol: "Cl", name: "Chlorine", atomic_weight: 35.45, covalent_radius: 1.02 },
    Element { atomic_number: 18, symbol: "Ar", name: "Argon", atomic_weight: 39.948, covalent_radius: 1.06 },
    Element { atomic_number: 19, symbol: "K", name: "Potassium", atomic_weight: 39.098, covalent_radius: 2.03 },
    Element { atomic_number: 20, symbol: "Ca", name: "Calcium", atomic_weight: 40.078, covalent_radius: 1.76 },
    Element { atomic_number: 21, symbol: "Sc", name: "Scandium", atomic_weight: 44.956, covalent_radius: 1.70 },
    Element { atomic_number: 22, symbol: "Ti", name: "Titanium", atomic_weight: 47.867, covalent_radius: 1.60 },
    Element { atomic_number: 23, symbol: "V", name: "Vanadium", atomic_weight: 50.942, covalent_radius: 1.53 },
    Element { atomic_number: 24, symbol: "Cr", name: "Chromium", atomic_weight: 51.996, covalent_radius: 1.39 },
    Element { atomic_number: 25, symbol: "Mn", name: "Manganese", atomic_weight: 54.938, covalent_radius: 1.39 },
    Element { atomic_number: 26, symbol: "Fe", name: "Iron", atomic_weight: 55.845, covalent_radius: 1.32 },
    Element { atomic_number: 27, symbol: "Co", name: "Cobalt", atomic_weight: 58.933, covalent_radius: 1.26 },
    Element { atomic_number: 28, symbol: "Ni", name: "Nickel", atomic_weight: 58.693, covalent_radius: 1.24 },
    Element { atomic_number: 29, symbol: "Cu", name: "Copper", atomic_weight: 63.546, covalent_radius: 1.32 },
    Element { atomic_number: 30, symbol: "Zn", name: "Zinc", atomic_weight: 65.38, covalent_radius: 1.22 },
    Element { atomic_number: 31, symbol: "Ga", name: "Gallium", atomic_weight: 69.723, covalent_radius: 1.22 },
    Element { atomic_number: 32, symbol: "Ge", name: "Germanium", atomic_weight: 72.63, covalent_radius: 1.20 },
    Element { atomic_number: 33, symbol: "As", name: "Arsenic", atomic_weight: 74.922, covalent_radius: 1.19 },
    Element { atomic_number: 34, symbol: "Se", name: "Selenium", atomic_weight: 78.96, covalent_radius: 1.20 },
    Element { atomic_number: 35, symbol: "Br", name: "Bromine", atomic_weight: 79.904, covalent_radius: 1.20 },
    Element { atomic_number: 36, symbol: "Kr", name: "Krypton", atomic_weight: 83.798, covalent_radius: 1.16 },
    Element { atomic_number: 37, symbol: "Rb", name: "Rubidium", atomic_weight: 85.468, covalent_radius: 2.20 },
    Element { atomic_number: 38, symbol: "Sr", name: "Strontium", atomic_weight: 87.62, covalent_radius: 1.95 },
    Element { atomic_number: 39, symbol: "Y", name: "Yttrium", atomic_weight: 88.906, covalent_radius: 1.90 },
    Element { atomic_number: 40, symbol: "Zr", name: "Zirconium", atomic_weight: 91.224, covalent_radius: 1.75 },
    Element { atomic_number: 41, symbol: "Nb", name: "Niobium", atomic_weight: 92.906, covalent_radius: 1.64 },
    Element { atomic_number: 42, symbol: "Mo", name: "Molybdenum", atomic_weight: 95.95, covalent_radius: 1.54 },
    Element { atomic_number: 43, symbol: "Tc", name: "Technetium", atomic_weight: 98.0, covalent_radius: 1.47 },
    Element { atomic_number: 44, symbol: "Ru", name: "Ruthenium", atomic_weight: 101.07, covalent_radius: 1.46 },
    Element { atomic_number: 45, symbol: "Rh", name: "Rhodium", atomic_weight: 102.906, covalent_radius: 1.42 },
    Element { atomic_number: 46, symbol: "Pd", name: "Palladium", atomic_weight: 106.42, covalent_radius: 1.39 },
    Element { atomic_number: 47, symbol: "Ag", name: "Silver", atomic_weight: 107.868, covalent_radius: 1.45 },
    Element { atomic_number: 48, symbol: "Cd", name: "Cadmium", atomic_weight: 112.414, covalent_radius: 1.44 },
    Element { atomic_number: 49, symbol: "In", name: "Indium", atomic_weight: 114.818, covalent_radius: 1.42 },
    Element { atomic_number: 50, symbol: "Sn", name: "Tin", atomic_weight: 118.710, covalent_radius: 1.39 },
    Element { atomic_number: 51, symbol: "Sb", name: "Antimony", atomic_weight: 121.760, covalent_radius: 1.39 },
    Element { atomic_number: 52, symbol: "Te", name: "Tellurium", atomic_weight: 127.60, covalent_radius: 1.38 },
    Element { atomic_number: 53, symbol: "I", name: "Iodine", atomic_weight: 126.904, covalent_radius: 1.39 },
    Element { atomic_number: 54, symbol: "Xe", name: "Xenon", atomic_weight: 131.293, covalent_radius: 1.40 },
    Element { atomic_number: 55, symbol: "Cs", name: "Caesium", atomic_weight: 132.905, covalent_radius: 2.44 },
    Element { atomic_number: 56, symbol: "Ba", name: "Barium", atomic_weight: 137.327, covalent_radius: 2.15 },
    Element { atomic_number: 57, symbol: "La", name: "Lanthanum", atomic_weight: 138.905, covalent_radius: 2.07 },
    Element { atomic_number: 58, symbol: "Ce", name: "Cerium", atomic_weight: 140.116, covalent_radius: 2.04 },
    Element { atomic_number: 59, symbol: "Pr", name: "Praseodymium", atomic_weight: 140.908, covalent_radius: 2.03 },
    Element { atomic_number: 60, symbol: "Nd", name: "Neodymium", atomic_weight: 144.242, covalent_radius: 2.01 },
    Element { atomic_number: 61, symbol: "Pm", name: "Promethium", atomic_weight: 145.0, covalent_radius: 1.99 },
    Element { atomic_number: 62, symbol: "Sm", name: "Samarium", atomic_weight: 150.36, covalent_radius: 1.98 },
    Element { atomic_number: 63, symbol: "Eu", name: "Europium", atomic_weight: 151.964, covalent_radius: 1.98 },
    Element { atomic_number: 64, symbol: "Gd", name: "Gadolinium", atomic_weight: 157.25, covalent_radius: 1.96 },
    Element { atomic_number: 65, symbol: "Tb", name: "Terbium", atomic_weight: 158.925, covalent_radius: 1.94 },
    Element { atomic_number: 66, symbol: "Dy", name: "Dysprosium", atomic_weight: 162.500, covalent_radius: 1.92 },
    Element { atomic_number: 67, symbol: "Ho", name: "Holmium", atomic_weight: 164.930, covalent_radius: 1.92 },
    Element { atomic_number: 68, symbol: "Er", name: "Erbium", atomic_weight: 167.259, covalent_radius: 1.89 },
    Element { atomic_number: 69, symbol: "Tm", name: "Thulium", atomic_weight: 168.934, covalent_radius: 1.90 },
    Element { atomic_number: 70, symbol: "Yb", name: "Ytterbium", atomic_weight: 173.045, covalent_radius: 1.87 },
    Element { atomic_number: 71, symbol: "Lu", name: "Lutetium", atomic_weight: 174.967, covalent_radius: 1.87 },
    Element { atomic_number: 72, symbol: "Hf", name: "Hafnium", atomic_weight: 178.49, covalent_radius: 1.75 },
    Element { atomic_number: 73, symbol: "Ta", name: "Tantalum", atomic_weight: 180.948, covalent_radius: 1.70 },
    Element { atomic_number: 74, symbol: "W", name: "Tungsten", atomic_weight: 183.84, covalent_radius: 1.62 },
    Element { atomic_number: 75, symbol: "Re", name: "Rhenium", atomic_weight: 186.207, covalent_radius: 1.51 },
    Element { atomic_number: 76, symbol: "Os", name: "Osmium", atomic_weight: 190.23, covalent_radius: 1.44 },
    Element { atomic_number: 77, symbol: "Ir", name: "Iridium", atomic_weight: 192.217, covalent_radius: 1.41 },
    Element { atomic_number: 78, symbol: "Pt", name: "Platinum", atomic_weight: 195.084, covalent_radius: 1.36 },
    Element { atomic_number: 79, symbol: "Au", name: "Gold", atomic_weight: 196.967, covalent_radius: 1.36 },
    Element { atomic_number: 80, symbol: "Hg", name: "Mercury", atomic_weight: 200.592, covalent_radius: 1.32 },
    Element { atomic_number: 81, symbol: "Tl", name: "Thallium", atomic_weight: 204.38, covalent_radius: 1.45 },
    Element { atomic_number: 82, symbol: "Pb", name: "Lead", atomic_weight: 207.2, covalent_radius: 1.46 },
    Element { atomic_number: 83, symbol: "Bi", name: "Bismuth", atomic_weight: 208.980, covalent_radius: 1.48 },
    Element { atomic_number: 84, symbol: "Po", name: "Polonium", atomic_weight: 209.0, covalent_radius: 1.40 },
    Element { atomic_number: 85, symbol: "At", name: "Astatine", atomic_weight: 210.0, covalent_radius: 1.50 },
    Element { atomic_number: 86, symbol: "Rn", name: "Radon", atomic_weight: 222.0, covalent_radius: 1.50 },
    Element { atomic_number: 87, symbol: "Fr", name: "Francium", atomic_weight: 223.0, covalent_radius: 2.60 },
    Element { atomic_number: 88, symbol: "Ra", name: "Radium", atomic_weight: 226.0, covalent_radius: 2.21 },
    Element { atomic_number: 89, symbol: "Ac", name: "Actinium", atomic_weight: 227.0, covalent_radius: 2.15 },
    Element { atomic_number: 90, symbol: "Th", name: "Thorium", atomic_weight: 232.038, covalent_radius: 2.06 },
    Element { atomic_number: 91, symbol: "Pa", name: "Protactinium", atomic_weight: 231.036, covalent_radius: 2.00 },
    Element { atomic_number: 92, symbol: "U", name: "Uranium", atomic_weight: 238.029, covalent_radius: 1.96 },
    Element { atomic_number: 93, symbol: "Np", name: "Neptunium", atomic_weight: 237.0, covalent_radius: 1.90 },
    Element { atomic_number: 94, symbol: "Pu", name: "Plutonium", atomic_weight: 244.0, covalent_radius: 1.87 },
    Element { atomic_number: 95, symbol: "Am", name: "Americium", atomic_weight: 243.0, covalent_radius: 1.80 },
    Element { atomic_number: 96, symbol: "Cm", name: "Curium", atomic_weight: 247.0, covalent_radius: 1.69 },
];

/// Look up an element by its symbol (e.g. "Si", "O").
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Look up an element by its atomic number (1-based).
pub fn element_by_number(n: u8) -> Option<&'static Element> {
    if (1..=ELEMENTS.len() as u8).contains(&n) {
        Some(&ELEMENTS[(n - 1) as usize])
    } else {
        None
    }
}
