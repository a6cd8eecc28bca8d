use christophers_kitchen::app::{AppState, Screen};
use christophers_kitchen::config::AppConfig;
use christophers_kitchen::models::*;
use christophers_kitchen::shell::{Flow, Shell};
use christophers_kitchen::store::{MenuStore, SeedSet};
use speculate2::speculate;

fn sample_shell(confirm_destructive: bool) -> Shell {
    let config = AppConfig {
        confirm_destructive,
        ..AppConfig::default()
    };
    Shell::new(AppState::new(MenuStore::with_seed(SeedSet::Sample)), config)
}

/// Runs one line and returns what the shell printed.
fn exec(shell: &mut Shell, line: &str) -> String {
    let mut out = Vec::new();
    shell.execute_line(line, &mut out).expect("Failed to execute line");
    String::from_utf8(out).expect("Output is not UTF-8")
}

speculate! {
    before {
        let mut shell = sample_shell(true);
    }

    describe "add" {
        it "adds a quoted dish with a description" {
            let out = exec(&mut shell, "add \"Bobotie\" mains 110 spiced mince, egg topping");

            assert!(out.starts_with("Added \"Bobotie\" (Mains, R110.00)"));
            let last = shell.state().store.items().last().expect("Menu is empty").clone();
            assert_eq!(last.name, "Bobotie");
            assert_eq!(last.description, "spiced mince, egg topping");
            assert_eq!(shell.state().store.len(), 6);
        }

        it "surfaces the validation reason and keeps the menu" {
            let out = exec(&mut shell, "add \"\" mains 10");
            assert_eq!(out, "Could not add item: name required\n");
            assert_eq!(shell.state().store.len(), 5);
        }

        it "rejects a negative price typed as a flag" {
            let out = exec(&mut shell, "add Chips starters -5");
            assert_eq!(out, "Could not add item: price must not be negative\n");
            assert_eq!(shell.state().store.len(), 5);
        }

        it "asks for the price when it is missing" {
            let out = exec(&mut shell, "add Chips starters");
            assert_eq!(out, "Could not add item: price required\n");
        }

        it "shows the add form without arguments" {
            let out = exec(&mut shell, "add");
            assert!(out.starts_with("Add a dish:"));
            assert_eq!(shell.state().screen, Screen::AddItem);
        }
    }

    describe "views" {
        it "renders the home screen" {
            let out = exec(&mut shell, "menu");
            assert!(out.contains("Total Items: 5"));
            assert!(out.contains("  Starters  R40.00\n"));
        }

        it "filters by course" {
            let out = exec(&mut shell, "filter mains");

            assert!(out.starts_with("Filter: Mains (2 of 5)\n"));
            assert!(out.contains("Grilled Chicken"));
            assert!(!out.contains("Garlic Bread"));
            assert_eq!(shell.state().screen, Screen::Filter(CourseFilter::Course(Course::Mains)));
        }

        it "filters everything by default" {
            let out = exec(&mut shell, "filter");
            assert!(out.starts_with("Filter: All (5 of 5)\n"));
        }

        it "rejects an unknown filter" {
            let out = exec(&mut shell, "filter sides");
            assert!(out.starts_with("Unknown course filter 'sides'"));
            assert_eq!(shell.state().screen, Screen::Home);
        }

        it "prints averages with two decimals" {
            exec(&mut shell, "add Trifle dessert 56");
            exec(&mut shell, "add Tart dessert 56");
            let out = exec(&mut shell, "averages");
            assert!(out.contains("  Dessert   R55.67\n"));
        }
    }

    describe "destructive commands" {
        it "asks before clearing" {
            let out = exec(&mut shell, "clear");
            assert!(out.starts_with("Clear menu:"));
            assert!(out.ends_with("[yes/no]\n"));
            assert_eq!(shell.state().store.len(), 5);
        }

        it "clears after yes" {
            exec(&mut shell, "clear");
            let out = exec(&mut shell, "yes");
            assert_eq!(out, "Cleared 5 item(s).\n");
            assert!(shell.state().store.is_empty());
        }

        it "keeps everything after no" {
            exec(&mut shell, "delete-last");
            assert_eq!(exec(&mut shell, "no"), "Cancelled.\n");
            assert_eq!(exec(&mut shell, "yes"), "Nothing to confirm.\n");
            assert_eq!(shell.state().store.len(), 5);
        }

        it "deletes by id prefix" {
            let id = shell.state().store.items()[0].id;
            let prefix = id.to_string()[..8].to_string();

            let out = exec(&mut shell, &format!("delete {}", prefix));
            assert!(out.contains("Garlic Bread"));

            assert_eq!(exec(&mut shell, "y"), "Item deleted.\n");
            assert!(shell.state().store.get(id).is_none());
        }

        it "deletes by full id" {
            let id = shell.state().store.items()[2].id;
            exec(&mut shell, &format!("delete {}", id));
            exec(&mut shell, "yes");
            assert!(shell.state().store.get(id).is_none());
        }

        it "reports an id that matches nothing" {
            let out = exec(&mut shell, "delete zzzz");
            assert_eq!(out, "No single item matches 'zzzz'.\n");
            assert!(shell.state().pending().is_none());
        }

        it "commits straight away when confirmation is off" {
            let mut quick = sample_shell(false);
            let out = exec(&mut quick, "delete-last");
            assert_eq!(out, "Deleted \"Greek Salad\".\n");
            assert_eq!(quick.state().store.len(), 4);
        }
    }

    describe "parsing" {
        it "ignores blank lines" {
            let mut out = Vec::new();
            let flow = shell.execute_line("   ", &mut out).expect("Failed to execute line");
            assert_eq!(flow, Flow::Continue);
            assert!(out.is_empty());
        }

        it "reports unknown commands without quitting" {
            let mut out = Vec::new();
            let flow = shell.execute_line("bake cake", &mut out).expect("Failed to execute line");
            assert_eq!(flow, Flow::Continue);
            assert!(String::from_utf8(out).expect("Output is not UTF-8").contains("error"));
        }

        it "reports an unclosed quote" {
            assert_eq!(exec(&mut shell, "add \"Beef"), "Unclosed \" quote.\n");
        }

        it "quits on quit and exit" {
            let mut out = Vec::new();
            assert_eq!(shell.execute_line("quit", &mut out).expect("Failed"), Flow::Quit);
            assert_eq!(shell.execute_line("exit", &mut out).expect("Failed"), Flow::Quit);
        }
    }

    describe "run" {
        it "drives a whole session from input" {
            let input = "add Soup starters 25\nclear\nyes\nmenu\nquit\nmenu\n";
            let mut out = Vec::new();

            shell.run(input.as_bytes(), &mut out).expect("Session failed");

            let out = String::from_utf8(out).expect("Output is not UTF-8");
            assert!(out.starts_with("Christopher's Kitchen\nTotal Items: 5\n"));
            assert!(out.contains("Cleared 6 item(s)."));
            assert!(out.contains("Total Items: 0\n  (no items)\n"));
            assert_eq!(out.matches("kitchen> ").count(), 5);
        }

        it "stops at end of input" {
            let mut out = Vec::new();
            shell.run("delete-last\nyes\n".as_bytes(), &mut out).expect("Session failed");
            assert_eq!(shell.into_state().store.len(), 4);
        }
    }
}
