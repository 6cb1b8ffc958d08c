//! Usage text for each command.

pub const NOT_A_COMMAND: &str = "That is not a command.";

pub fn usage(command: &str) -> Option<&'static str> {
    let text = match command {
        "insert" => {
            "The command insert followed by the value to be inserted will insert the value at \
             the end of the queue. This is equivalent to enqueue for users familiar with the \
             queue structure. Format: insert [val] (where val is replaced by value to be inserted)"
        }
        "remove" => {
            "The command remove will remove the value at the front of the queue. This is \
             equivalent to dequeue for users familiar with the queue structure. The last \
             remaining value cannot be removed. Format: remove"
        }
        "search" => {
            "Search followed by the value to be searched for in the queue will return the \
             position of the first node holding that value, counting from 0 at the front. \
             Format: search [val] (where val is the value to be searched for)"
        }
        "print" => "Will print the queue. Format: print",
        "illustrate" => "Will print the queue, one element at a time. Format: illustrate",
        "help" => "Describes a command. Format: help [command]",
        "quit" => "Quits the program after printing the final queue. Format: quit",
        _ => return None,
    };
    Some(text)
}

pub fn describe(command: &str) -> &'static str {
    usage(command).unwrap_or(NOT_A_COMMAND)
}
