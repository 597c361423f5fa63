//! Built-in editor catalog
//!
//! The default decision tree walked when no tree file is configured. Keys
//! are raw and get title-cased at render time; ordering here is render
//! order.

use crate::domain::{DecisionTree, InternalNode, LeafNode, LinkNode};

/// The built-in "pick your editor" tree for ZLS, the Zig language server.
pub fn default_tree() -> DecisionTree {
    DecisionTree::new("Which editor are you using?")
        .choice(
            "Visual Studio Code",
            LeafNode::new(true)
                .feature("auto_updater", true)
                .feature("in_editor_configuration", true)
                .markdown(
                    "To install ZLS for VSCode, simply [install the ZLS for VSCode extension]\
                     (vscode:extension/AugusteRame.zls-vscode) ([or open in browser]\
                     (https://marketplace.visualstudio.com/items?itemName=AugusteRame.zls-vscode)).",
                ),
        )
        .choice(
            "Sublime Text",
            InternalNode::new("Which version?")
                .choice(
                    "Sublime Text 3",
                    LeafNode::new(false).markdown(
                        r#"```json
{
    "clients": {
        "zig": {
            "command": ["zls"],
            "enabled": true,
            "languageId": "zig",
            "scopes": ["source.zig"],
            "syntaxes": ["Packages/Zig Language/Syntaxes/Zig.tmLanguage"]
        }
    }
}
```"#,
                    ),
                )
                .choice(
                    "Sublime Text 4",
                    LeafNode::new(false).markdown(
                        r#"```
{
    "clients": {
        "zig": {
            "command": ["zls"],
            "enabled": true,
            "selector": "source.zig"
        }
    }
}
```"#,
                    ),
                ),
        )
        .choice(
            "Neovim / Vim8",
            InternalNode::new("Which language client extension are you using?")
                .choice(
                    "CoC",
                    InternalNode::new("Extension or manual?")
                        .choice(
                            "Extension",
                            LeafNode::new(false)
                                .feature("auto_updater", false)
                                .feature("auto_installer", true)
                                .feature("in_editor_configuration", true)
                                .markdown(
                                    "Run `:CocInstall coc-zls` to install \
                                     [coc-zls](https://github.com/xiyaowong/coc-zls), \
                                     this extension supports the same functionality \
                                     as the VS Code extension.",
                                ),
                        )
                        .choice(
                            "Manually register",
                            LeafNode::new(false).markdown(
                                r#"```json
{
    "languageserver": {
        "zls" : {
            "command": "command_or_path_to_zls",
            "filetypes": ["zig"]
        }
    }
}
```"#,
                            ),
                        ),
                )
                .choice(
                    "YouCompleteMe",
                    LeafNode::new(false).markdown(
                        r#"- Install YouCompleteMe from [here](https://github.com/ycm-core/YouCompleteMe.git).
- Add these lines to your vimrc:

```vim
"ensure zig is a recognized filetype
autocmd BufNewFile,BufRead *.zig set filetype=zig
let g:ycm_language_server =
    \ [
    \{
    \     'name': 'zls',
    \     'filetypes': [ 'zig' ],
    \     'cmdline': [ '/path/to/zls_executable' ]
    \    }
    \ ]
```"#,
                    ),
                )
                .choice(
                    "nvim-lspconfig",
                    LinkNode::new(
                        "zls setup in the nvim-lspconfig server list",
                        "https://github.com/neovim/nvim-lspconfig/blob/master/doc/server_configurations.md#zls",
                    ),
                )
                .choice(
                    "LanguageClient-neovim",
                    LinkNode::new(
                        "LanguageClient-neovim setup guide",
                        "https://github.com/autozimu/LanguageClient-neovim",
                    ),
                ),
        )
        .choice(
            "Emacs",
            InternalNode::new("Which LSP client?")
                .choice(
                    "eglot",
                    LeafNode::new(false).markdown(
                        r#"- Install [eglot](https://github.com/joaotavora/eglot) (built in since Emacs 29).
- Add this to your init file:

```elisp
(add-to-list 'eglot-server-programs '(zig-mode . ("zls")))
```"#,
                    ),
                )
                .choice(
                    "lsp-mode",
                    LeafNode::new(false)
                        .feature("in_editor_configuration", true)
                        .markdown(
                            r#"- Install [lsp-mode](https://github.com/emacs-lsp/lsp-mode) and `zig-mode`.
- lsp-mode ships a zls client; point it at your executable:

```elisp
(setq lsp-zig-zls-executable "/path/to/zls")
```"#,
                        ),
                ),
        )
}
