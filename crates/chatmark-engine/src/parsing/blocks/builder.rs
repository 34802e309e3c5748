use super::{
    classify::{ClassifiedLine, LineKind, classify},
    kinds::Paragraph,
    types::{Block, Document},
};

/// Groups classified lines into blocks with a single forward pointer.
///
/// This is phase 2 of block parsing. Each iteration looks at the line under
/// the pointer, and runs of quotes, list items or text only ever peek at the
/// line immediately after the last one consumed.
pub struct BlockBuilder<'a> {
    lines: Vec<ClassifiedLine<'a>>,
    pos: usize,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    /// Trims and classifies every line up front.
    pub fn new(lines: &[&'a str]) -> Self {
        Self {
            lines: lines.iter().map(|line| classify(line.trim())).collect(),
            pos: 0,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Document {
        while let Some(line) = self.lines.get(self.pos).copied() {
            self.pos += 1;
            match line.kind {
                LineKind::Blank => {}
                LineKind::Rule => self.out.push(Block::HorizontalRule),
                LineKind::Heading { level } => self.out.push(Block::Heading {
                    level,
                    text: line.content.to_string(),
                }),
                LineKind::Quote => {
                    let lines = self.take_run(line);
                    self.out.push(Block::Blockquote { lines });
                }
                LineKind::UnorderedItem => {
                    let items = self.take_run(line);
                    self.out.push(Block::UnorderedList { items });
                }
                LineKind::OrderedItem => {
                    let items = self.take_run(line);
                    self.out.push(Block::OrderedList { items });
                }
                LineKind::Text => {
                    let lines = self.take_run(line);
                    self.out.push(Block::Paragraph {
                        text: Paragraph::join(&lines),
                    });
                }
            }
        }

        Document { blocks: self.out }
    }

    /// Collects `first` plus every following line of the same kind.
    ///
    /// Stops without consuming the first line of any other kind, so it
    /// starts the next block.
    fn take_run(&mut self, first: ClassifiedLine<'a>) -> Vec<String> {
        let mut run = vec![first.content.to_string()];
        while let Some(next) = self.lines.get(self.pos).filter(|l| l.kind == first.kind) {
            run.push(next.content.to_string());
            self.pos += 1;
        }
        run
    }
}

/// Assembles a sequence of raw lines into a [`Document`].
pub fn assemble(lines: &[&str]) -> Document {
    BlockBuilder::new(lines).finish()
}
