//! Rule names of the standard rule base

/// Biomolecule domain node
pub const BIOMOLECULE_NODE: &str = "Biomolecule Node";
/// RNA cargo on a cationic particle
pub const RNA_BINDING: &str = "RNA-based Ligand Rule";
/// RNA cargo in a lipid particle
pub const LIPOSOMAL_RNA: &str = "Liposomal RNA Complexation";

/// Material domain node
pub const MATERIAL_NODE: &str = "Material Node";
/// Superparamagnetic iron oxide particles
pub const SPIO_CORONA: &str = "SPIO Protein Corona Adsorption";
/// Metallic cores
pub const METALLIC_ADSORPTION: &str = "Metallic Surface Adsorption";
/// Polymeric cores
pub const POLYMERIC_ENCAPSULATION: &str = "Polymeric Encapsulation";
/// Lipid cores
pub const LIPID_GENERAL: &str = "Lipid General";

/// Charge domain node
pub const CHARGE_NODE: &str = "Charge Interaction Node";
/// Cationic particle with anionic ligand
pub const ELECTROSTATIC_BINDING: &str = "Electrostatic Binding";
/// Lipid particle with a known charge
pub const LIPID_EXCEPTION: &str = "Lipid Nanoparticle Exception";

/// Surface domain node
pub const SURFACE_NODE: &str = "Surface Feature Node";
/// PEGylated formulations by name
pub const PEGYLATED_NEUTRALIZATION: &str = "PEGylated Neutralization";
/// PEG-coated polymeric particles
pub const PEGYLATED_POLYMERIC: &str = "PEGylated Polymeric Stabilization";

/// Ligand domain node
pub const LIGAND_NODE: &str = "Ligand Property Node";
/// Nonpolar ligand on metallic or polymeric core
pub const HYDROPHOBIC_ADSORPTION: &str = "Hydrophobic Adsorption";
/// Polar ligand on anionic particle
pub const HYDROPHILIC_REPULSION: &str = "Hydrophilic Repulsion";
/// Antibody ligands
pub const ANTIBODY_TARGETING: &str = "Antibody-Mediated Targeting";
