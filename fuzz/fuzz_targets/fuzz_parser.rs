use afl::fuzz;

fn main() {
    fuzz!(|data: &[u8]| {
        let Ok(input) = std::str::from_utf8(data) else {
            return;
        };
        let Ok(tokens) = arbor::lex(input) else {
            return;
        };
        if let Ok(ast) = arbor::Parser::parse(&tokens) {
            // Rendering, copying and analysis must never panic on a parsed tree
            let copy = arbor::deep_copy(&ast);
            assert_eq!(arbor::render(&copy), arbor::render(&ast));
            let _ = arbor::analyze(&ast);
            assert_eq!(arbor::release(copy), arbor::release(ast));
        }
    });
}
