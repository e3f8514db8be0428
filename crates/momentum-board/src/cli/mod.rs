/*
[INPUT]:  Subcommands that run outside the TUI
[OUTPUT]: CLI helpers for the momentum-board binary
[POS]:    CLI module root
[UPDATE]: When adding a subcommand
*/

pub mod init;
