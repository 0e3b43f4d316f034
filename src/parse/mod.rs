//! The GenBank flat-file parsing pipeline.
//!
//! [`parse_record`] is the single entry point: it splits a record into its
//! header, feature-table and sequence regions, extracts header fields and
//! references, tokenizes and assembles the features, and hands back a
//! complete [`Gbson`] document.
//!
//! The conversion is a pure function over the input text. Only a missing
//! `FEATURES`/`ORIGIN` marker is fatal; every per-feature anomaly
//! (unparsable table line, malformed location, unresolvable parent) is
//! logged and recovered from.

mod assemble;
mod feature_table;
mod header;
mod location;
mod record;
mod references;

use chrono::{SecondsFormat, Utc};
use hashbrown::HashSet;
use indexmap::IndexMap;
use log::warn;
use once_cell::sync::Lazy;

pub use self::location::parse_location;
use crate::data_structs::{
    Feature,
    FormatInfo,
    Gbson,
    Meta,
    RawFeature,
    Source,
};

/// Qualifier keys copied into the output document. Keys outside this set
/// are dropped silently; membership is checked on the base key with any
/// `$` duplicate-suffixes stripped, so repeated qualifiers keep all their
/// slots.
static ALLOWED_QUALIFIER_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "acronym,allele,altitude,anticodon,authority,bio_material,biotype,breed,\
     cell_line,cell_type,chromosome,citation,clone,clone_lib,\
     codon_recognized,codon_start,collected_by,collection_date,common,\
     country,cultivar,culture_collection,db_xref,dev_stage,direction,\
     ec_number,ecotype,estimated_length,exception,experiment,function,\
     gap_type,gene,gene_synonym,genotype,group,haplogroup,haplotype,host,\
     identified_by,inference,info,isolate,isolation_source,lab_host,\
     lat_lon,linkage_evidence,locus_tag,map,mating_type,\
     mobile_element_type,mol_type,ncrna_class,no_qualifier,nomenclature,\
     not_allowed,note,number,operon,organelle,organism,pcr_primers,\
     plastid,pop_variant,product,protein_id,pseudo,pseudogene,\
     regulatory_class,replace,ribosomal_slippage,rpt_family,rpt_type,\
     rpt_unit_range,rpt_unit_seq,satellite,specimen_voucher,standard_name,\
     strain,sub_species,sub_strain,synonym,tag_peptide,tissue_lib,\
     tissue_type,trans_splicing,transcript_id,transl_except,transl_table,\
     translation,translationinput,translation_input,type,variety,annotator"
        .split(',')
        .collect()
});

/// Converts one GenBank flat-file record into a [`Gbson`] document.
///
/// Returns an error only when the mandatory `FEATURES`/`ORIGIN` markers
/// cannot be located; no partially-filled document is ever produced.
/// Per-feature problems are logged via [`log::warn!`] and the offending
/// feature is skipped.
pub fn parse_record(text: &str) -> anyhow::Result<Gbson> {
    let parts = record::split_record(text)?;

    let header_fields = header::extract_header_fields(&parts.head);
    let references = references::extract_references(&parts.head);
    let origin = record::normalize_sequence(&parts.sequence);

    let mut source: Option<Source> = None;
    let mut unassembled = Vec::new();

    for raw in feature_table::tokenize_features(&parts.table) {
        let range = match parse_location(&raw.location) {
            Ok(range) => range,
            Err(e) => {
                warn!("dropping feature i{} ({}): {}", raw.id, raw.feature_type, e);
                continue;
            },
        };
        let is_source = raw.is_source();
        let RawFeature {
            id,
            parent,
            feature_type,
            qualifiers,
            ..
        } = raw;
        let qualifiers = filter_qualifiers(qualifiers);

        if is_source {
            // Promoted to document metadata; the last one wins.
            source = Some(Source {
                range: Some(range),
                qualifiers,
            });
        }
        else {
            unassembled.push(Feature {
                id,
                parent,
                feature_type,
                range,
                qualifiers,
                children: Vec::new(),
            });
        }
    }

    let features = assemble::assemble_forest(unassembled);

    let mut fields = IndexMap::new();
    for (key, value) in header_fields {
        // The SOURCE header tag would collide with the source metadata
        // object owned by the promoted source feature.
        if key == "source"
            || header::EXCLUDED_HEADER_KEYS.contains(key.as_str())
        {
            continue;
        }
        fields.insert(key, value);
    }

    let meta = Meta {
        format: FormatInfo::default(),
        circular: parts.circular,
        locus: parts.locus,
        length: origin.len(),
        datetime: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        references,
        fields,
        source: source.unwrap_or_default(),
    };

    Ok(Gbson {
        meta,
        features,
        origin,
    })
}

/// Keeps only allow-listed qualifiers, preserving order and `$` slots.
fn filter_qualifiers(
    qualifiers: IndexMap<String, String>
) -> IndexMap<String, String> {
    qualifiers
        .into_iter()
        .filter(|(key, _)| {
            ALLOWED_QUALIFIER_KEYS.contains(key.trim_end_matches('$'))
        })
        .collect()
}
