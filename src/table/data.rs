//! The built-in element dataset.
//!
//! Entries are in atomic-number order. There is no entry for 117, and the
//! heaviest elements keep their systematic placeholder names and symbols.

/// A raw dataset row, turned into an [`Element`](crate::Element) when the
/// table is built.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Record {
    pub atomic: u8,
    pub name: &'static str,
    pub symbol: &'static str,
    pub mass: f64,
    pub british: Option<&'static str>,
}

impl Record {
    const fn new(atomic: u8, name: &'static str, symbol: &'static str, mass: f64) -> Self {
        Self {
            atomic,
            name,
            symbol,
            mass,
            british: None,
        }
    }

    const fn british(self, british: &'static str) -> Self {
        Self {
            british: Some(british),
            ..self
        }
    }
}

pub(crate) static ELEMENTS: [Record; 117] = [
    Record::new(1, "Hydrogen", "H", 1.00794),
    Record::new(2, "Helium", "He", 4.002602),
    Record::new(3, "Lithium", "Li", 6.941),
    Record::new(4, "Beryllium", "Be", 9.012182),
    Record::new(5, "Boron", "B", 10.811),
    Record::new(6, "Carbon", "C", 12.0107),
    Record::new(7, "Nitrogen", "N", 14.0067),
    Record::new(8, "Oxygen", "O", 15.9994),
    Record::new(9, "Fluorine", "F", 18.9994),
    Record::new(10, "Neon", "Ne", 20.1797),
    Record::new(11, "Sodium", "Na", 22.98976928),
    Record::new(12, "Magnesium", "Mg", 24.305),
    Record::new(13, "Aluminum", "Al", 26.9815386).british("Aluminium"),
    Record::new(14, "Silicon", "Si", 28.0855),
    Record::new(15, "Phosphorus", "P", 30.973762),
    Record::new(16, "Sulfur", "S", 32.065).british("Sulphur"),
    Record::new(17, "Chlorine", "Cl", 35.453),
    Record::new(18, "Argon", "Ar", 39.948),
    Record::new(19, "Potassium", "K", 39.0983),
    Record::new(20, "Calcium", "Ca", 40.078),
    Record::new(21, "Scandium", "Sc", 44.955912),
    Record::new(22, "Titanium", "Ti", 47.867),
    Record::new(23, "Vanadium", "V", 50.9415),
    Record::new(24, "Chromium", "Cr", 51.9961),
    Record::new(25, "Manganese", "Mn", 54.938045),
    Record::new(26, "Iron", "Fe", 55.845),
    Record::new(27, "Cobalt", "Co", 58.933195),
    Record::new(28, "Nickel", "Ni", 58.6934),
    Record::new(29, "Copper", "Cu", 63.546),
    Record::new(30, "Zinc", "Zn", 65.38),
    Record::new(31, "Gallium", "Ga", 69.723),
    Record::new(32, "Germanium", "Ge", 72.64),
    Record::new(33, "Arsenic", "As", 74.9216),
    Record::new(34, "Selenium", "Se", 78.96),
    Record::new(35, "Bromine", "Br", 79.904),
    Record::new(36, "Krypton", "Kr", 83.798),
    Record::new(37, "Rubidium", "Rb", 85.4678),
    Record::new(38, "Strontium", "Sr", 87.62),
    Record::new(39, "Yttrium", "Y", 88.90585),
    Record::new(40, "Zirconium", "Zr", 91.224),
    Record::new(41, "Niobium", "Nb", 92.90638),
    Record::new(42, "Molybdenum", "Mo", 95.96),
    Record::new(43, "Technetium", "Tc", 98.0),
    Record::new(44, "Ruthenium", "Ru", 101.07),
    Record::new(45, "Rhodium", "Rh", 102.9055),
    Record::new(46, "Palladium", "Pd", 106.42),
    Record::new(47, "Silver", "Ag", 107.8682),
    Record::new(48, "Cadmium", "Cd", 112.411),
    Record::new(49, "Indium", "In", 114.818),
    Record::new(50, "Tin", "Sn", 118.71),
    Record::new(51, "Antimony", "Sb", 121.76),
    Record::new(52, "Tellurium", "Te", 127.6),
    Record::new(53, "Iodine", "I", 126.90447),
    Record::new(54, "Xenon", "Xe", 131.293),
    Record::new(55, "Cesium", "Cs", 132.9054519),
    Record::new(56, "Barium", "Ba", 137.327),
    Record::new(57, "Lanthanum", "La", 138.90547),
    Record::new(58, "Cerium", "Ce", 140.116),
    Record::new(59, "Praseodymium", "Pr", 140.90765),
    Record::new(60, "Neodymium", "Nd", 144.242),
    Record::new(61, "Promethium", "Pm", 145.0),
    Record::new(62, "Samarium", "Sm", 150.36),
    Record::new(63, "Europium", "Eu", 151.964),
    Record::new(64, "Gadolinium", "Gd", 157.25),
    Record::new(65, "Terbium", "Tb", 158.92535),
    Record::new(66, "Dysprosium", "Dy", 162.5001),
    Record::new(67, "Holmium", "Ho", 164.93032),
    Record::new(68, "Erbium", "Er", 167.259),
    Record::new(69, "Thulium", "Tm", 168.93421),
    Record::new(70, "Ytterbium", "Yb", 173.054),
    Record::new(71, "Lutetium", "Lu", 174.9668),
    Record::new(72, "Hafnium", "Hf", 178.49),
    Record::new(73, "Tantalum", "Ta", 180.94788),
    Record::new(74, "Tungsten", "W", 183.84),
    Record::new(75, "Rhenium", "Re", 186.207),
    Record::new(76, "Osmium", "Os", 190.23),
    Record::new(77, "Iridium", "Ir", 192.217),
    Record::new(78, "Platinum", "Pt", 192.084),
    Record::new(79, "Gold", "Au", 196.966569),
    Record::new(80, "Hydrargyrum", "Hg", 200.59),
    Record::new(81, "Thallium", "Tl", 204.3833),
    Record::new(82, "Lead", "Pb", 207.2),
    Record::new(83, "Bismuth", "Bi", 208.980401),
    Record::new(84, "Polonium", "Po", 210.0),
    Record::new(85, "Astatine", "At", 210.0),
    Record::new(86, "Radon", "Rn", 220.0),
    Record::new(87, "Francium", "Fr", 223.0),
    Record::new(88, "Radium", "Ra", 226.0),
    Record::new(89, "Actinium", "Ac", 227.0),
    Record::new(90, "Thorium", "Th", 232.03806),
    Record::new(91, "Protactinium", "Pa", 231.03588),
    Record::new(92, "Uranium", "U", 238.02891),
    Record::new(93, "Neptunium", "Np", 237.0),
    Record::new(94, "Plutonium", "Pu", 244.0),
    Record::new(95, "Americium", "Am", 243.0),
    Record::new(96, "Curium", "Cm", 247.0),
    Record::new(97, "Berkelium", "Bk", 247.0),
    Record::new(98, "Californium", "Cf", 251.0),
    Record::new(99, "Einsteinium", "Es", 252.0),
    Record::new(100, "Fermium", "Fm", 257.0),
    Record::new(101, "Mendelevium", "Md", 258.0),
    Record::new(102, "Nobelium", "No", 259.0),
    Record::new(103, "Lawrencium", "Lr", 262.0),
    Record::new(104, "Rutherfordium", "Rf", 261.0),
    Record::new(105, "Dubnium", "Db", 262.0),
    Record::new(106, "Seaborgium", "Sg", 266.0),
    Record::new(107, "Bohrium", "Bh", 264.0),
    Record::new(108, "Hassium", "Hs", 277.0),
    Record::new(109, "Meitnerium", "Mt", 268.0),
    Record::new(110, "Ununnilium", "Ds", 271.0),
    Record::new(111, "Unununium", "Rg", 272.0),
    Record::new(112, "Ununbium", "Uub", 285.0),
    Record::new(113, "Ununtrium", "Uut", 284.0),
    Record::new(114, "Ununquadium", "Uuq", 289.0),
    Record::new(115, "Ununpentium", "Uup", 288.0),
    Record::new(116, "Ununhexium", "Uuh", 292.0),
    Record::new(118, "Ununoctium", "Uuo", 294.0),
];
