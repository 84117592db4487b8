//! Atomic-symbol tables and frequency permutations
//!
//! Position in a symbol table is the numeric label used in the exchange files
//! of that dataset. Consumers key on position, so entries must never be
//! reordered or removed.

pub(super) const AIDS_SYMBOLS: &[&str] = &[
    "C", "O", "Cu", "N", "S", "P", "Cl", "Zn", "B", "Br", "Co", "Mn", "As", "Al", "Ni", "Se",
    "Si", "V", "Sn", "I", "F", "Li", "Sb", "Fe", "Pd", "Hg", "Bi", "Na", "Ca", "Ti", "Ho", "Ge",
    "Pt", "Ru", "Rh", "Cr", "Ga", "K", "Ag", "Au", "Tb", "Ir", "Te", "Mg", "Pb", "W", "Cs", "Mo",
    "Re", "Cd", "Os", "Pr", "Nd", "Sm", "Gd", "Yb", "Er", "U", "Tl", "Ac",
];

pub(super) const EMOLECULE_SYMBOLS: &[&str] = &[
    "Cs", "Cu", "Yb", "Cl", "Pt", "Pr", "Co", "Cr", "Li", "Cd", "Ce", "Hg", "Hf", "La", "Lu",
    "Pd", "Tl", "Tm", "Ho", "Pb", "*", "Ti", "Te", "Dy", "Ta", "Os", "Mg", "Tb", "Au", "Se",
    "F", "Sc", "Fe", "In", "Si", "B", "C", "As", "Sn", "N", "Ba", "O", "Eu", "H", "Sr", "I", "Mo",
    "Mn", "K", "Ir", "Er", "Ru", "Ag", "W", "V", "Ni", "P", "S", "Nb",
    "Y", "Na", "Sb", "Al", "Ge", "Rb", "Re", "Gd", "Ga", "Br", "Rh", "Ca", "Bi", "Zn", "Zr",
    "R#", "R", "X", "R1", "A", "U", "Ar", "Kr", "Xe", "e", ".", "Tc", "Mu", "Mu-", "He", "Ps", "At",
    "Po", "Be", "Ne", "Rn", "Fr", "Ra", "Ac", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
    "Ds", "Rg", "Nd", "Pm", "Sm", "Th", "Pa", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "0", "Uub", "R2", "R3", "R4", "D", "R5", "ACP",
];

pub(super) const PUBCHEM_SYMBOLS: &[&str] = &[
    "H", "C", "O", "N", "Cl", "S", "F", "P", "Br", "I", "Na", "Si",
    "As", "Hg", "Ca", "K", "B", "Sn", "Se", "Al", "Fe", "Mg", "Zn", "Pb", "Co", "Cu",
    "Cr", "Mn", "Sb", "Cd", "Ni", "Be", "Ag", "Li", "Tl", "Sr", "Bi", "Ce", "Ba", "U", "Ge",
    "Pt", "Te", "V", "Zr", "Cs", "Au", "Mo", "W", "La", "Ti", "Rh", "Lu", "Pd", "In", "Eu", "Ga",
    "Pr", "Ho", "Th", "Ta", "Tc", "Tb", "Ir", "Nd", "Nb", "Rb", "Kr", "Yb", "Cm", "Pu", "Cf", "Hf",
    "He", "Pa", "Tm", "Pm", "Po", "Xe", "Dy", "Os", "Md", "Sc", "Ar", "At", "Sm", "Er", "Ru",
    "Es", "Ac", "Am", "Ne", "Y", "Re", "Gd", "No", "Rn", "Np", "Fm", "Bk", "Lr",
];

pub(super) const DEFAULT_SYMBOLS: &[&str] = &[
    "C", "N", "O", "H", "S", "P", "F", "Cl", "Br", "I", "Na", "Si",
];

// Original indices, most frequent first.

pub(super) const AIDS_FREQUENCY: &[usize] = &[
    0, 1, 3, 4, 6, 21, 5, 9, 16, 20, 8, 28, 19, 10, 2, 25, 14, 33, 15, 12,
    34, 48, 26, 35, 11, 46, 32, 38, 7, 27, 42, 37, 36, 45, 23, 24, 40, 44,
    49, 59, 13, 17, 22, 30, 39, 43, 47, 51, 52, 53, 57,
];

pub(super) const EMOLECULE_FREQUENCY: &[usize] = &[
    36, 41, 39, 3, 30, 57, 68, 56, 45, 60, 34, 43, 35, 48, 38, 29, 8, 26, 32,
    15, 47, 0, 1, 4, 55, 71, 72, 6, 25, 52, 63, 69, 70, 7, 19, 51, 61, 65,
    21, 40, 44, 46, 49, 53, 62,
];

pub(super) const PUBCHEM_FREQUENCY: &[usize] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
    38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55,
    56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73,
    74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91,
    92, 93, 94, 95, 96, 97, 98, 99, 0,
];

pub(super) const DEFAULT_FREQUENCY: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
