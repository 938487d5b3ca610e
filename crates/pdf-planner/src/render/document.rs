//! The document container: owns every page surface and writes the PDF

use crate::layout::Rect;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::canvas::FONT_RESOURCE;
use super::{PageCanvas, Surface, SurfaceHandle};

/// Collection of planner pages, in the order they were allocated.
#[derive(Debug, Default)]
pub struct PlannerDocument {
    pages: Vec<PageCanvas>,
}

impl PlannerDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new blank page and return its handle.
    pub fn allocate_surface(&mut self, width: f32, height: f32) -> SurfaceHandle {
        self.pages.push(PageCanvas::new(width, height));
        SurfaceHandle(self.pages.len() - 1)
    }

    pub fn surface(&self, handle: SurfaceHandle) -> Option<&PageCanvas> {
        self.pages.get(handle.0)
    }

    /// Mutable access to a page allocated by this document.
    ///
    /// # Panics
    /// If `handle` was issued by another document.
    pub fn surface_mut(&mut self, handle: SurfaceHandle) -> &mut PageCanvas {
        &mut self.pages[handle.0]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageCanvas] {
        &self.pages
    }

    /// Total number of clickable links across all pages
    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|page| page.links().len()).sum()
    }

    /// Write every page into a PDF document.
    ///
    /// Page links become `/Link` annotations whose destination is the
    /// target page, fitted to the window.
    pub fn finish(self, title: &str) -> Document {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();

        // Reserve every page id up front so links can point forward
        let page_ids: Vec<ObjectId> = self.pages.iter().map(|_| output.new_object_id()).collect();

        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let font_id = output.add_object(font_dict);

        let mut fonts = Dictionary::new();
        fonts.set(FONT_RESOURCE, Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));
        let resources_id = output.add_object(resources);

        for (canvas, &page_id) in self.pages.into_iter().zip(page_ids.iter()) {
            let (width, height) = (canvas.width(), canvas.height());
            let (content, links) = canvas.into_parts();

            let content_id =
                output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

            let mut annotations = Vec::new();
            for link in links {
                let Some(&target_id) = page_ids.get(link.target.0) else {
                    log::warn!(
                        "Dropping link to page {} which is not in this document",
                        link.target.0
                    );
                    continue;
                };
                let annot_id = output.add_object(link_annotation(&link.rect, target_id));
                annotations.push(Object::Reference(annot_id));
            }

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_tree_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width),
                    Object::Real(height),
                ]),
            );
            page_dict.set("Contents", Object::Reference(content_id));
            page_dict.set("Resources", Object::Reference(resources_id));
            if !annotations.is_empty() {
                page_dict.set("Annots", Object::Array(annotations));
            }

            output.objects.insert(page_id, Object::Dictionary(page_dict));
        }

        // Create pages tree
        let count = page_ids.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            (
                "Kids",
                Object::Array(page_ids.into_iter().map(Object::Reference).collect()),
            ),
            ("Count", Object::Integer(count)),
        ]);
        output
            .objects
            .insert(pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let catalog_id = output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_tree_id)),
        ]));

        let info_id = output.add_object(Dictionary::from_iter(vec![
            ("Title", lopdf::text_string(title)),
            ("Producer", Object::string_literal("pdf-planner")),
        ]));

        output.trailer.set("Root", catalog_id);
        output.trailer.set("Info", info_id);

        output
    }
}

fn link_annotation(rect: &Rect, target_page: ObjectId) -> Dictionary {
    let mut annot = Dictionary::new();
    annot.set("Type", Object::Name(b"Annot".to_vec()));
    annot.set("Subtype", Object::Name(b"Link".to_vec()));
    annot.set(
        "Rect",
        Object::Array(vec![
            Object::Real(rect.x),
            Object::Real(rect.y),
            Object::Real(rect.right()),
            Object::Real(rect.top()),
        ]),
    );
    annot.set(
        "Border",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(0),
        ]),
    );
    annot.set(
        "Dest",
        Object::Array(vec![
            Object::Reference(target_page),
            Object::Name(b"Fit".to_vec()),
        ]),
    );
    annot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_order_is_page_order() {
        let mut doc = PlannerDocument::new();
        let first = doc.allocate_surface(100.0, 200.0);
        let second = doc.allocate_surface(100.0, 200.0);
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_finish_writes_pages_and_links() {
        let mut doc = PlannerDocument::new();
        let first = doc.allocate_surface(100.0, 200.0);
        let second = doc.allocate_surface(100.0, 200.0);
        doc.surface_mut(first)
            .link(Rect::new(0.0, 0.0, 10.0, 10.0), second);
        doc.surface_mut(second)
            .link(Rect::new(0.0, 0.0, 10.0, 10.0), first);
        assert_eq!(doc.link_count(), 2);

        let pdf = doc.finish("Test");
        let pages = pdf.get_pages();
        assert_eq!(pages.len(), 2);

        let first_id = pages[&1];
        let second_id = pages[&2];
        let first_page = pdf.get_dictionary(first_id).unwrap();
        let annots = first_page.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);

        let annot_id = annots[0].as_reference().unwrap();
        let annot = pdf.get_dictionary(annot_id).unwrap();
        let dest = annot.get(b"Dest").unwrap().as_array().unwrap();
        assert_eq!(dest[0].as_reference().unwrap(), second_id);
    }

    #[test]
    fn test_finish_without_links_has_no_annots() {
        let mut doc = PlannerDocument::new();
        doc.allocate_surface(100.0, 200.0);
        let pdf = doc.finish("Test");
        let page_id = pdf.get_pages()[&1];
        let page = pdf.get_dictionary(page_id).unwrap();
        assert!(page.get(b"Annots").is_err());
    }
}
