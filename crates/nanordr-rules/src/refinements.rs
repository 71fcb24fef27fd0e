//! Specific exceptions refining the domain nodes

use crate::names;
use nanordr_domain::{Affinity, Conclusion, InputCase, MonolayerOrder};
use nanordr_engine::RuleNode;

/// Core types treated as lipid particles
pub(crate) const LIPID_TYPES: &[&str] = &["lipid-based", "liposomal", "lipid"];

fn np_type_is_one_of(case: &InputCase, types: &[&str]) -> bool {
    case.nanoparticle.text("type").is_one_of(types)
}

fn np_charge_is(case: &InputCase, charge: &str) -> bool {
    case.nanoparticle.text("surface_charge").is(charge)
}

pub(crate) fn rna_binding() -> RuleNode {
    RuleNode::from_fns(
        names::RNA_BINDING,
        "biomolecule",
        |case| case.biomolecule.text("type").is("RNA") && np_charge_is(case, "positive"),
        |_| Conclusion::predict(Affinity::High, MonolayerOrder::SemiOrdered).with_rule_confidence(0.92),
    )
}

pub(crate) fn liposomal_rna() -> RuleNode {
    RuleNode::from_fns(
        names::LIPOSOMAL_RNA,
        "biomolecule",
        |case| {
            np_type_is_one_of(case, &["lipid-based", "liposomal"])
                && case.biomolecule.text("type").is("RNA")
        },
        |_| Conclusion::predict(Affinity::High, MonolayerOrder::Stable).with_rule_confidence(0.9),
    )
}

pub(crate) fn spio_corona() -> RuleNode {
    RuleNode::from_fns(
        names::SPIO_CORONA,
        "nanoparticle",
        |case| {
            case.nanoparticle.text("type").is("metallic")
                && case.display_name().contains_ignore_case("spio")
        },
        |_| Conclusion::predict(Affinity::High, MonolayerOrder::Ordered).with_rule_confidence(0.95),
    )
}

pub(crate) fn metallic_adsorption() -> RuleNode {
    RuleNode::from_fns(
        names::METALLIC_ADSORPTION,
        "nanoparticle",
        |case| np_type_is_one_of(case, &["metallic", "metallic-gold"]),
        |_| Conclusion::predict(Affinity::High, MonolayerOrder::Ordered).with_rule_confidence(0.9),
    )
}

pub(crate) fn polymeric_encapsulation() -> RuleNode {
    RuleNode::from_fns(
        names::POLYMERIC_ENCAPSULATION,
        "nanoparticle",
        |case| case.nanoparticle.text("type").is("polymeric"),
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Stable).with_rule_confidence(0.9),
    )
}

pub(crate) fn lipid_general() -> RuleNode {
    RuleNode::from_fns(
        names::LIPID_GENERAL,
        "nanoparticle",
        |case| np_type_is_one_of(case, LIPID_TYPES),
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Fluid).with_rule_confidence(0.7),
    )
}

pub(crate) fn electrostatic_binding() -> RuleNode {
    RuleNode::from_fns(
        names::ELECTROSTATIC_BINDING,
        "charge",
        |case| np_charge_is(case, "positive") && case.ligand.text("charge").is("negative"),
        |_| Conclusion::predict(Affinity::High, MonolayerOrder::Stable).with_rule_confidence(0.95),
    )
}

pub(crate) fn lipid_exception() -> RuleNode {
    RuleNode::from_fns(
        names::LIPID_EXCEPTION,
        "charge",
        |case| np_type_is_one_of(case, LIPID_TYPES),
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Fluid).with_rule_confidence(0.9),
    )
}

pub(crate) fn pegylated_neutralization() -> RuleNode {
    RuleNode::from_fns(
        names::PEGYLATED_NEUTRALIZATION,
        "surface",
        |case| case.display_name().contains_ignore_case("peg"),
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::SemiOrdered).with_rule_confidence(0.85),
    )
}

pub(crate) fn pegylated_polymeric() -> RuleNode {
    RuleNode::from_fns(
        names::PEGYLATED_POLYMERIC,
        "surface",
        |case| {
            case.nanoparticle.text("type").is("polymeric") && case.surface.text("material").is("peg")
        },
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Ordered).with_rule_confidence(0.85),
    )
}

pub(crate) fn hydrophobic_adsorption() -> RuleNode {
    RuleNode::from_fns(
        names::HYDROPHOBIC_ADSORPTION,
        "ligand",
        |case| {
            case.ligand.text("polarity").is("nonpolar")
                && np_type_is_one_of(case, &["metallic", "polymeric"])
        },
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Disordered).with_rule_confidence(0.75),
    )
}

pub(crate) fn hydrophilic_repulsion() -> RuleNode {
    RuleNode::from_fns(
        names::HYDROPHILIC_REPULSION,
        "ligand",
        |case| case.ligand.text("polarity").is("polar") && np_charge_is(case, "negative"),
        |_| Conclusion::predict(Affinity::Low, MonolayerOrder::Unstable).with_rule_confidence(0.8),
    )
}

pub(crate) fn antibody_targeting() -> RuleNode {
    RuleNode::from_fns(
        names::ANTIBODY_TARGETING,
        "ligand",
        |case| case.ligand.text("type").is("antibody"),
        |_| Conclusion::predict(Affinity::High, MonolayerOrder::Ordered).with_rule_confidence(0.9),
    )
}
