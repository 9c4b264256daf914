//! Instructions sent with the direct generation call

use crate::config::constants::urls::STYLE_LIBRARY;
use crate::gemini::{Content, GenerateContentRequest};
use crate::template::ThemeId;

/// System instruction: plain documents only
pub const SYSTEM_INSTRUCTION: &str = "You generate standalone HTML files and nothing else. \
Output one valid HTML document. Never output JSX, React components, or code containing \
'import' or 'export' statements. Never write 'className'; always write 'class'. \
The response must begin with <!DOCTYPE html> and end with </html>, with no markdown code \
fences and no explanations.";

pub fn system_instruction() -> Content {
    Content::system_text(SYSTEM_INSTRUCTION)
}

/// User turn carrying the formatting rules, an example, and the task
pub fn user_prompt(prompt: &str, theme: ThemeId) -> String {
    format!(
        r#"ROLE: You write raw HTML files. Your entire answer is one valid HTML document.

NEVER:
1. Write "import React" or any other import
2. Write "export default" or any other export
3. Use "className=" (that is JSX, not HTML)
4. Use {{curlyBraces}} for values (that is JSX)
5. Wrap the answer in ```jsx or ```html fences
6. Write any text before <!DOCTYPE html>
7. Write any explanation after </html>
8. Define React components or functions
9. Use const/let/function at the top level
10. Use JSX syntax of any kind

ALWAYS:
1. Start with exactly "<!DOCTYPE html>"
2. Use "class=", never "className="
3. Put JavaScript inside <script> tags
4. Produce a complete standalone HTML file
5. Include <script src="{STYLE_LIBRARY}"></script>
6. Make the layout responsive with Tailwind classes
7. End with </html>

EXAMPLE OF A CORRECT ANSWER:
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Example</title>
  <script src="{STYLE_LIBRARY}"></script>
</head>
<body>
  <div class="container">
    <h1>Hello World</h1>
  </div>
  <script>
    // page scripts go here
  </script>
</body>
</html>

TASK: Create an HTML page for: {prompt}
THEME: {theme}

YOUR ANSWER (begin with <!DOCTYPE html>):"#
    )
}

/// Full direct-call request for one generation
pub fn generation_request(prompt: &str, theme: ThemeId) -> GenerateContentRequest {
    GenerateContentRequest::single_turn(Some(SYSTEM_INSTRUCTION), user_prompt(prompt, theme))
}

/// Tiny request used to check that a credential is accepted
pub fn credential_probe_request() -> GenerateContentRequest {
    let mut request = GenerateContentRequest::single_turn(None, "Reply with the single word OK.");
    if let Some(config) = request.generation_config.as_mut() {
        config.max_output_tokens = 8;
    }
    request
}
