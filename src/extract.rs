//! Extraction driver.
//!
//! Parses the page, converts it into a web document, classifies the text
//! blocks with the selected profile, pushes the decisions back onto the web
//! document and runs the post passes before assembling the result.

use crate::converter::DomConverter;
use crate::error::Result;
use crate::options::Options;
use crate::result::{ExtractResult, ImageData};
use crate::webdocument::filters::{lead_image, nested_element_retainer, relevant_elements};

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    options.validate()?;
    let base_url = options.parsed_base_url()?;

    let conversion =
        DomConverter::new(base_url.as_ref(), options.max_tree_depth).convert_html(html)?;
    let mut web = conversion.document;
    let dom = conversion.dom;

    let candidate_titles: Vec<String> = if options.candidate_titles.is_empty() {
        conversion.title.into_iter().collect()
    } else {
        options.candidate_titles.clone()
    };
    let title = candidate_titles.first().cloned();

    let mut text_document = web.create_text_document_view(&dom);
    text_document.set_candidate_titles(candidate_titles);
    options.profile.process(&mut text_document);
    log::trace!("classified blocks:\n{}", text_document.debug_string());

    text_document.apply_to_model(&mut web);
    let content_text = text_document.content();
    let word_count = text_document.count_words_in_content();
    let block_count = text_document.blocks().len();

    relevant_elements::process(&mut web);

    let lead_index = if options.find_lead_image {
        let found = lead_image::find(&web, &dom);
        if let Some(index) = found {
            web.elements_mut()[index].set_is_content(true);
        }
        found
    } else {
        None
    };

    if options.retain_nested_elements {
        nested_element_retainer::process(&mut web);
    }

    let mut images = Vec::new();
    let mut lead_image = None;
    for (index, element) in web.elements().iter().enumerate() {
        if !element.is_content() {
            continue;
        }
        let Some(mut image) = ImageData::from_element(element) else {
            continue;
        };
        if lead_index == Some(index) {
            image.is_lead = true;
            lead_image = Some(image.clone());
        }
        images.push(image);
    }

    log::debug!(
        "extracted {word_count} words in {block_count} blocks, {} images",
        images.len()
    );

    Ok(ExtractResult {
        content_text,
        title,
        lead_image,
        images,
        word_count,
        block_count,
        warnings: conversion.warnings,
    })
}
